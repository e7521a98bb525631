//! Static device corpora used across harnesses.
//!
//! `CELLS_CSV` is a small hand-checked dataset: nine unique devices plus one
//! byte-identical duplicate of the Galaxy S10 row. The expected numbers in
//! the `EXPECTED_*` constants are derived from it by hand.

use std::path::{Path, PathBuf};

/// Header line shared by every CSV corpus.
pub const HEADER: &str = "oem,model,launch_announced,launch_status,body_dimensions,body_weight,body_sim,display_type,display_size,display_resolution,features_sensors,platform_os";

pub const CELLS_CSV: &str = r#"oem,model,launch_announced,launch_status,body_dimensions,body_weight,body_sim,display_type,display_size,display_resolution,features_sensors,platform_os
Nokia,N900,"2009, August",Discontinued,110.9 x 59.8 x 19.7 mm,181 g (6.38 oz),Mini-SIM,TFT resistive touchscreen,3.5 inches,800 x 480 pixels,"Accelerometer, proximity","Linux, Maemo 5"
Nokia,N810,2007,"Available. Released 2007, November",128 x 72 x 14 mm,226 g (7.97 oz),No,TFT resistive touchscreen,4.13 inches,800 x 480 pixels,Accelerometer,"Linux, Maemo OS2008"
Samsung,Galaxy S10,"2019, February 20","Available. Released 2019, March",149.9 x 70.4 x 7.8 mm,157 g (5.54 oz),"Single SIM (Nano-SIM) or Hybrid Dual SIM (Nano-SIM, dual stand-by)",Dynamic AMOLED capacitive touchscreen,6.1 inches,1440 x 3040 pixels,"Fingerprint (under display, ultrasonic), accelerometer, gyro, proximity, compass, barometer, heart rate, SpO2","Android 9.0 (Pie), upgradable to Android 12, One UI 4.1"
Samsung,Galaxy S10,"2019, February 20","Available. Released 2019, March",149.9 x 70.4 x 7.8 mm,157 g (5.54 oz),"Single SIM (Nano-SIM) or Hybrid Dual SIM (Nano-SIM, dual stand-by)",Dynamic AMOLED capacitive touchscreen,6.1 inches,1440 x 3040 pixels,"Fingerprint (under display, ultrasonic), accelerometer, gyro, proximity, compass, barometer, heart rate, SpO2","Android 9.0 (Pie), upgradable to Android 12, One UI 4.1"
Apple,iPhone 11,"2019, September 10","Available. Released 2019, September",150.9 x 75.7 x 8.3 mm,194 g (6.84 oz),Nano-SIM and eSIM,Liquid Retina IPS LCD,6.1 inches,828 x 1792 pixels,"Face ID, accelerometer, gyro, proximity, compass, barometer","iOS 13, upgradable to iOS 15"
Xiaomi,Mi Max 4,-,Cancelled,-,-,"Hybrid Dual SIM (Nano-SIM, dual stand-by)","IPS LCD capacitive touchscreen, 16M colors",7.2 ,1080 x 2310 pixels (~354 ppi density),"Fingerprint (rear-mounted), accelerometer, gyro, proximity, compass",Android 9.0 (Pie)
Google,Pixel 4,"2019, October 15","Available. Released 2019, October",147.1 x 68.8 x 8.2 mm,162 g (5.71 oz),Nano-SIM and eSIM,P-OLED capacitive touchscreen,5.7 inches,1080 x 2280 pixels,"Face ID, accelerometer, gyro, proximity, compass, barometer",Android 10
Motorola,Razr V3,"2004, Q3",Available. Released 2004,,95 g (3.35 oz),Mini-SIM,TFT,2.2 inches,176 x 220 pixels,,Proprietary
Sony,Xperia 1,"2019, February 25","Available. Released 2019, May",167 x 72 x 8.2 mm,178 g (6.28 oz),Nano-SIM,OLED capacitive touchscreen,6.5 inches,1644 x 3840 pixels,"Fingerprint (side-mounted), accelerometer, gyro, proximity, compass, barometer","Android 9.0 (Pie), upgradable to Android 11"
Huawei,Mate X,"2019, February 24","Available. Released 2020, March",161.3 x 146.2 x 11 mm,295 g (10.41 oz),Dual SIM,Foldable OLED capacitive touchscreen,8.0 inches,2200 x 2480 pixels,"Fingerprint (side-mounted), accelerometer, gyro, proximity, compass","Android 9.0 (Pie), EMUI 9.1.1"
"#;

pub const EXPECTED_RECORDS: usize = 9;
pub const EXPECTED_DUPLICATES: usize = 1;
pub const EXPECTED_MANUFACTURERS: &[&str] = &[
    "Apple", "Google", "Huawei", "Motorola", "Nokia", "Samsung", "Sony", "Xiaomi",
];
/// (181 + 226 + 157 + 194 + 162 + 95 + 178 + 295) / 8
pub const EXPECTED_AVERAGE_WEIGHT: f64 = 186.0;

/// Write `CELLS_CSV` to `dir/cells.csv` and return the path.
pub fn write_cells_csv(dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join("cells.csv");
    std::fs::write(&path, CELLS_CSV)?;
    Ok(path)
}

/// Build a CSV document from `HEADER` and the given data lines.
pub fn csv_with_rows(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}

/// Generate `n` distinct device lines for throughput tests, cycling through
/// a few manufacturers and repeating every tenth line to exercise dedup.
pub fn corpus_high_volume(n: usize) -> String {
    const OEMS: &[&str] = &["Nokia", "Samsung", "Apple", "Google", "Sony"];
    let lines: Vec<String> = (0..n)
        .map(|i| {
            let id = if i % 10 == 9 { i - 1 } else { i };
            format!(
                r#"{oem},Model {id},"{year}, May","Available. Released {year}, June",1 x 2 x 3 mm,{weight} g,Nano-SIM,OLED,{size} inches,1080 x 1920 pixels,"Fingerprint, accelerometer, gyro","Android {v}, upgradable""#,
                oem = OEMS[id % OEMS.len()],
                year = 2010 + id % 12,
                weight = 120 + id % 90,
                size = 4 + id % 3,
                v = 4 + id % 10,
            )
        })
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    csv_with_rows(&refs)
}
