//! Digitized performance charts and their evaluation wrappers.
//!
//! Each static below is one published nomograph digitized panel by panel;
//! the wrapper functions thread the caller's conditions through
//! [`solve_chain`](crate::chart::solve_chain) and collapse any failed panel
//! to `None`.

use once_cell::sync::Lazy;

use crate::chart::{solve_chain, Chart};
use crate::geometry::Point3;

/// Accelerate-stop distance, flaps up, dry runway.
static ACCEL_STOP_FLAPS_UP_DRY: Lazy<Vec<Chart>> = Lazy::new(|| {
    vec![
        Chart::new(vec![
            Point3::new(-42.5, 14000.0, 6000.0),
            Point3::new(-2.5, 14000.0, 7600.0),
            Point3::new(24.0, 14000.0, 9700.0),
            Point3::new(-38.0, 12000.0, 5500.0),
            Point3::new(8.0, 12000.0, 7100.0),
            Point3::new(28.0, 12000.0, 8600.0),
            Point3::new(-35.0, 10000.0, 5100.0),
            Point3::new(15.0, 10000.0, 6500.0),
            Point3::new(32.0, 10000.0, 7700.0),
            Point3::new(-31.0, 8000.0, 4700.0),
            Point3::new(22.0, 8000.0, 6100.0),
            Point3::new(36.0, 8000.0, 6900.0),
            Point3::new(-27.0, 6000.0, 4300.0),
            Point3::new(28.0, 6000.0, 5700.0),
            Point3::new(40.0, 6000.0, 6300.0),
            Point3::new(-23.0, 4000.0, 4100.0),
            Point3::new(34.0, 4000.0, 5300.0),
            Point3::new(44.0, 4000.0, 5700.0),
            Point3::new(-19.0, 2000.0, 3800.0),
            Point3::new(40.0, 2000.0, 4900.0),
            Point3::new(47.0, 2000.0, 5300.0),
            Point3::new(-15.0, 0.0, 3500.0),
            Point3::new(45.0, 0.0, 4600.0),
            Point3::new(52.0, 0.0, 4800.0),
            Point3::new(-13.0, -1000.0, 3400.0),
            Point3::new(48.0, -1000.0, 4400.0),
            Point3::new(54.0, -1000.0, 4600.0),
        ]),
        Chart::new(vec![
            Point3::new(12500.0, 10000.0, 10000.0),
            Point3::new(12300.0, 10000.0, 9800.0),
            Point3::new(9000.0, 10000.0, 7900.0),
            Point3::new(12500.0, 9000.0, 9000.0),
            Point3::new(12300.0, 9000.0, 8800.0),
            Point3::new(9000.0, 9000.0, 7200.0),
            Point3::new(12500.0, 8000.0, 12300.0),
            Point3::new(12300.0, 8000.0, 7800.0),
            Point3::new(9000.0, 8000.0, 6600.0),
            Point3::new(12500.0, 7000.0, 7000.0),
            Point3::new(12300.0, 7000.0, 6800.0),
            Point3::new(9000.0, 7000.0, 5800.0),
            Point3::new(12500.0, 6000.0, 6000.0),
            Point3::new(12300.0, 6000.0, 5800.0),
            Point3::new(9000.0, 6000.0, 5100.0),
            Point3::new(12500.0, 5000.0, 5000.0),
            Point3::new(12350.0, 5000.0, 4900.0),
            Point3::new(9000.0, 5000.0, 4300.0),
            Point3::new(12500.0, 4000.0, 4000.0),
            Point3::new(12350.0, 4000.0, 3900.0),
            Point3::new(9000.0, 4000.0, 3500.0),
            Point3::new(12500.0, 3000.0, 3000.0),
            Point3::new(12400.0, 3000.0, 2900.0),
            Point3::new(9000.0, 3000.0, 2700.0),
        ]),
        Chart::new(vec![
            Point3::new(-2.0, 2000.0, 2100.0),
            Point3::new(0.0, 2000.0, 2000.0),
            Point3::new(2.0, 2000.0, 1800.0),
            Point3::new(-2.0, 3000.0, 3100.0),
            Point3::new(0.0, 3000.0, 3000.0),
            Point3::new(2.0, 3000.0, 2900.0),
            Point3::new(-2.0, 4000.0, 4100.0),
            Point3::new(0.0, 4000.0, 4000.0),
            Point3::new(2.0, 4000.0, 4000.0),
            Point3::new(-2.0, 5000.0, 5100.0),
            Point3::new(0.0, 5000.0, 5000.0),
            Point3::new(2.0, 5000.0, 5100.0),
            Point3::new(-2.0, 6000.0, 6075.0),
            Point3::new(0.0, 6000.0, 6000.0),
            Point3::new(2.0, 6000.0, 6150.0),
            Point3::new(-2.0, 7000.0, 7000.0),
            Point3::new(0.0, 7000.0, 7000.0),
            Point3::new(2.0, 7000.0, 7300.0),
            Point3::new(-2.0, 8000.0, 7750.0),
            Point3::new(0.0, 8000.0, 8000.0),
            Point3::new(2.0, 8000.0, 8400.0),
            Point3::new(-2.0, 9000.0, 8650.0),
            Point3::new(0.0, 9000.0, 9000.0),
            Point3::new(2.0, 9000.0, 9600.0),
            Point3::new(-2.0, 10000.0, 9400.0),
            Point3::new(0.0, 10000.0, 10000.0),
            Point3::new(2.0, 10000.0, 10800.0),
        ]),
        Chart::new(vec![
            Point3::new(-10.0, 2000.0, 2700.0),
            Point3::new(0.0, 2000.0, 2000.0),
            Point3::new(30.0, 2000.0, 1400.0),
            Point3::new(-10.0, 3000.0, 3900.0),
            Point3::new(0.0, 3000.0, 3000.0),
            Point3::new(30.0, 3000.0, 2200.0),
            Point3::new(-10.0, 4000.0, 5200.0),
            Point3::new(0.0, 4000.0, 4000.0),
            Point3::new(30.0, 4000.0, 3100.0),
            Point3::new(-10.0, 5000.0, 6300.0),
            Point3::new(0.0, 5000.0, 5000.0),
            Point3::new(30.0, 5000.0, 3900.0),
            Point3::new(-10.0, 6000.0, 7500.0),
            Point3::new(0.0, 6000.0, 6000.0),
            Point3::new(30.0, 6000.0, 4750.0),
            Point3::new(-10.0, 7000.0, 8700.0),
            Point3::new(0.0, 7000.0, 7000.0),
            Point3::new(30.0, 7000.0, 5600.0),
            Point3::new(-10.0, 8000.0, 9800.0),
            Point3::new(0.0, 8000.0, 8000.0),
            Point3::new(30.0, 8000.0, 6450.0),
            Point3::new(-10.0, 9000.0, 10950.0),
            Point3::new(0.0, 9000.0, 9000.0),
            Point3::new(30.0, 9000.0, 7250.0),
            Point3::new(-10.0, 10000.0, 12100.0),
            Point3::new(0.0, 10000.0, 10000.0),
            Point3::new(30.0, 10000.0, 8050.0),
            Point3::new(-10.0, 11000.0, 13200.0),
            Point3::new(0.0, 11000.0, 11000.0),
            Point3::new(30.0, 11000.0, 8850.0),
        ]),
        Chart::new(vec![
            Point3::new(1.0, 2000.0, 2000.0),
            Point3::new(0.85, 2000.0, 1400.0),
            Point3::new(1.0, 3000.0, 3000.0),
            Point3::new(0.85, 3000.0, 2200.0),
            Point3::new(1.0, 4000.0, 4000.0),
            Point3::new(0.85, 4000.0, 3050.0),
            Point3::new(1.0, 5000.0, 5000.0),
            Point3::new(0.85, 5000.0, 3775.0),
            Point3::new(1.0, 6000.0, 6000.0),
            Point3::new(0.85, 6000.0, 4500.0),
            Point3::new(1.0, 7000.0, 7000.0),
            Point3::new(0.85, 7000.0, 5200.0),
            Point3::new(1.0, 8000.0, 8000.0),
            Point3::new(0.85, 8000.0, 5950.0),
            Point3::new(1.0, 9000.0, 9000.0),
            Point3::new(0.85, 9000.0, 6700.0),
            Point3::new(1.0, 10000.0, 10000.0),
            Point3::new(0.85, 10000.0, 7300.0),
            Point3::new(1.0, 11000.0, 11000.0),
            Point3::new(0.85, 11000.0, 7950.0),
            Point3::new(1.0, 12000.0, 12000.0),
            Point3::new(0.85, 12000.0, 8600.0),
            Point3::new(1.0, 13000.0, 13000.0),
            Point3::new(0.85, 13000.0, 9200.0),
        ]),
    ]
});

/// Accelerate-stop distance, flaps up, wet runway.
static ACCEL_STOP_FLAPS_UP_WET: Lazy<Vec<Chart>> = Lazy::new(|| {
    vec![
        Chart::new(vec![
            Point3::new(-42.5, 14000.0, 8750.0),
            Point3::new(-2.5, 14000.0, 10800.0),
            Point3::new(22.0, 14000.0, 13700.0),
            Point3::new(-39.0, 12000.0, 7950.0),
            Point3::new(5.0, 12000.0, 10200.0),
            Point3::new(27.0, 12000.0, 12200.0),
            Point3::new(-35.0, 10000.0, 7400.0),
            Point3::new(14.0, 10000.0, 9400.0),
            Point3::new(32.0, 10000.0, 10950.0),
            Point3::new(-31.0, 8000.0, 6900.0),
            Point3::new(21.0, 8000.0, 8800.0),
            Point3::new(36.0, 8000.0, 10000.0),
            Point3::new(-27.0, 6000.0, 6400.0),
            Point3::new(28.0, 6000.0, 8200.0),
            Point3::new(40.0, 6000.0, 9000.0),
            Point3::new(-23.0, 4000.0, 6000.0),
            Point3::new(34.0, 4000.0, 7650.0),
            Point3::new(44.0, 4000.0, 8250.0),
            Point3::new(-19.0, 2000.0, 5600.0),
            Point3::new(40.0, 2000.0, 7200.0),
            Point3::new(47.0, 2000.0, 7600.0),
            Point3::new(-15.0, 0.0, 5200.0),
            Point3::new(45.0, 0.0, 6750.0),
            Point3::new(52.0, 0.0, 7050.0),
            Point3::new(-13.0, -1000.0, 5050.0),
            Point3::new(48.0, -1000.0, 6500.0),
            Point3::new(54.0, -1000.0, 6600.0),
        ]),
        Chart::new(vec![
            Point3::new(12500.0, 13000.0, 13000.0),
            Point3::new(12300.0, 13000.0, 12600.0),
            Point3::new(9000.0, 13000.0, 10900.0),
            Point3::new(12500.0, 12000.0, 12000.0),
            Point3::new(12300.0, 12000.0, 11600.0),
            Point3::new(9000.0, 12000.0, 10100.0),
            Point3::new(12500.0, 11000.0, 11000.0),
            Point3::new(12300.0, 11000.0, 10700.0),
            Point3::new(9000.0, 11000.0, 9350.0),
            Point3::new(12500.0, 10000.0, 10000.0),
            Point3::new(12300.0, 10000.0, 9750.0),
            Point3::new(9000.0, 10000.0, 8600.0),
            Point3::new(12500.0, 9000.0, 9000.0),
            Point3::new(12350.0, 9000.0, 8800.0),
            Point3::new(9000.0, 9000.0, 7800.0),
            Point3::new(12500.0, 8000.0, 8000.0),
            Point3::new(12350.0, 8000.0, 7800.0),
            Point3::new(9000.0, 8000.0, 7000.0),
            Point3::new(12500.0, 7000.0, 7000.0),
            Point3::new(12400.0, 7000.0, 6800.0),
            Point3::new(9000.0, 7000.0, 6200.0),
            Point3::new(12500.0, 6000.0, 6000.0),
            Point3::new(12400.0, 6000.0, 5800.0),
            Point3::new(9000.0, 6000.0, 5400.0),
            Point3::new(12500.0, 5000.0, 5000.0),
            Point3::new(12400.0, 5000.0, 4850.0),
            Point3::new(9000.0, 5000.0, 4500.0),
        ]),
        Chart::new(vec![
            Point3::new(-2.0, 4000.0, 4450.0),
            Point3::new(0.0, 4000.0, 4000.0),
            Point3::new(2.0, 4000.0, 3650.0),
            Point3::new(-2.0, 5000.0, 5600.0),
            Point3::new(0.0, 5000.0, 5000.0),
            Point3::new(2.0, 5000.0, 4650.0),
            Point3::new(-2.0, 6000.0, 6700.0),
            Point3::new(0.0, 6000.0, 6000.0),
            Point3::new(2.0, 6000.0, 5650.0),
            Point3::new(-2.0, 7000.0, 7800.0),
            Point3::new(0.0, 7000.0, 7000.0),
            Point3::new(2.0, 7000.0, 6650.0),
            Point3::new(-2.0, 8000.0, 8800.0),
            Point3::new(0.0, 8000.0, 8000.0),
            Point3::new(2.0, 8000.0, 7650.0),
            Point3::new(-2.0, 9000.0, 9900.0),
            Point3::new(0.0, 9000.0, 9000.0),
            Point3::new(2.0, 9000.0, 8600.0),
            Point3::new(-2.0, 10000.0, 10900.0),
            Point3::new(0.0, 10000.0, 10000.0),
            Point3::new(2.0, 10000.0, 9600.0),
            Point3::new(-2.0, 11000.0, 11800.0),
            Point3::new(0.0, 11000.0, 11000.0),
            Point3::new(2.0, 11000.0, 10600.0),
            Point3::new(-2.0, 12000.0, 12700.0),
            Point3::new(0.0, 12000.0, 12000.0),
            Point3::new(2.0, 12000.0, 11600.0),
            Point3::new(-2.0, 13000.0, 13600.0),
            Point3::new(0.0, 13000.0, 13000.0),
            Point3::new(2.0, 13000.0, 12600.0),
            Point3::new(0.0, 14000.0, 14000.0),
            Point3::new(2.0, 14000.0, 13600.0),
        ]),
        Chart::new(vec![
            Point3::new(-10.0, 4000.0, 5300.0),
            Point3::new(0.0, 4000.0, 4000.0),
            Point3::new(30.0, 4000.0, 2900.0),
            Point3::new(-10.0, 5000.0, 6600.0),
            Point3::new(0.0, 5000.0, 5000.0),
            Point3::new(30.0, 5000.0, 3700.0),
            Point3::new(-10.0, 6000.0, 7800.0),
            Point3::new(0.0, 6000.0, 6000.0),
            Point3::new(30.0, 6000.0, 4600.0),
            Point3::new(-10.0, 7000.0, 9000.0),
            Point3::new(0.0, 7000.0, 7000.0),
            Point3::new(30.0, 7000.0, 5400.0),
            Point3::new(-10.0, 8000.0, 10150.0),
            Point3::new(0.0, 8000.0, 8000.0),
            Point3::new(30.0, 8000.0, 6250.0),
            Point3::new(-10.0, 9000.0, 11300.0),
            Point3::new(0.0, 9000.0, 9000.0),
            Point3::new(30.0, 9000.0, 7150.0),
            Point3::new(-10.0, 10000.0, 12500.0),
            Point3::new(0.0, 10000.0, 10000.0),
            Point3::new(30.0, 10000.0, 8000.0),
            Point3::new(-10.0, 11000.0, 13600.0),
            Point3::new(0.0, 11000.0, 11000.0),
            Point3::new(30.0, 11000.0, 8800.0),
            Point3::new(-7.0, 12000.0, 14000.0),
            Point3::new(0.0, 12000.0, 12000.0),
            Point3::new(30.0, 12000.0, 9600.0),
            Point3::new(-3.0, 13000.0, 14000.0),
            Point3::new(0.0, 13000.0, 13000.0),
            Point3::new(30.0, 13000.0, 10400.0),
            Point3::new(0.0, 140000.0, 14000.0),
            Point3::new(30.0, 14000.0, 11200.0),
        ]),
        Chart::new(vec![
            Point3::new(1.0, 3000.0, 3000.0),
            Point3::new(0.85, 3000.0, 1950.0),
            Point3::new(1.0, 4000.0, 4000.0),
            Point3::new(0.85, 4000.0, 2700.0),
            Point3::new(1.0, 5000.0, 5000.0),
            Point3::new(0.85, 5000.0, 3600.0),
            Point3::new(1.0, 6000.0, 6000.0),
            Point3::new(0.85, 6000.0, 4550.0),
            Point3::new(1.0, 7000.0, 7000.0),
            Point3::new(0.85, 7000.0, 5300.0),
            Point3::new(1.0, 8000.0, 8000.0),
            Point3::new(0.85, 8000.0, 6050.0),
            Point3::new(1.0, 9000.0, 9000.0),
            Point3::new(0.85, 9000.0, 6800.0),
            Point3::new(1.0, 10000.0, 10000.0),
            Point3::new(0.85, 10000.0, 7500.0),
            Point3::new(1.0, 11000.0, 11000.0),
            Point3::new(0.85, 11000.0, 8250.0),
            Point3::new(1.0, 12000.0, 12000.0),
            Point3::new(0.85, 12000.0, 9000.0),
            Point3::new(1.0, 13000.0, 13000.0),
            Point3::new(0.85, 13000.0, 9700.0),
            Point3::new(1.0, 14000.0, 14000.0),
            Point3::new(0.85, 14000.0, 10400.0),
        ]),
    ]
});

/// Accelerate-go distance, flaps up, pressure altitude at or below 10000 ft.
static ACCEL_GO_FLAPS_UP_BELOW_10K_PA: Lazy<Vec<Chart>> = Lazy::new(|| {
    vec![
        Chart::new(vec![
            Point3::new(-14.0, -1000.0, 3350.0),
            Point3::new(50.0, -1000.0, 4800.0),
            Point3::new(54.0, -1000.0, 5200.0),
            Point3::new(-15.0, 0.0, 3500.0),
            Point3::new(43.0, 0.0, 4900.0),
            Point3::new(52.0, 0.0, 5950.0),
            Point3::new(-19.0, 2000.0, 3800.0),
            Point3::new(37.0, 2000.0, 5400.0),
            Point3::new(47.0, 2000.0, 6800.0),
            Point3::new(-23.0, 4000.0, 4200.0),
            Point3::new(31.0, 4000.0, 5900.0),
            Point3::new(44.0, 4000.0, 7900.0),
            Point3::new(-27.0, 6000.0, 4600.0),
            Point3::new(25.0, 6000.0, 6500.0),
            Point3::new(40.0, 6000.0, 9400.0),
            Point3::new(-31.0, 8000.0, 5100.0),
            Point3::new(19.0, 8000.0, 7200.0),
            Point3::new(36.0, 8000.0, 11600.0),
            Point3::new(-35.0, 10000.0, 5650.0),
            Point3::new(12.0, 10000.0, 8000.0),
            Point3::new(32.0, 10000.0, 14900.0),
        ]),
        Chart::new(vec![
            Point3::new(12500.0, 3000.0, 3000.0),
            Point3::new(11300.0, 3000.0, 2200.0),
            Point3::new(9000.0, 3000.0, 1600.0),
            Point3::new(12500.0, 4000.0, 4000.0),
            Point3::new(11300.0, 4000.0, 2900.0),
            Point3::new(9000.0, 4000.0, 2100.0),
            Point3::new(12500.0, 5000.0, 5000.0),
            Point3::new(11300.0, 5000.0, 3600.0),
            Point3::new(9000.0, 5000.0, 2600.0),
            Point3::new(12500.0, 6000.0, 6000.0),
            Point3::new(11300.0, 6000.0, 4200.0),
            Point3::new(9000.0, 6000.0, 3100.0),
            Point3::new(12500.0, 7000.0, 7000.0),
            Point3::new(11300.0, 7000.0, 4900.0),
            Point3::new(9000.0, 6000.0, 3600.0),
            Point3::new(12500.0, 8000.0, 8000.0),
            Point3::new(11300.0, 8000.0, 5600.0),
            Point3::new(9000.0, 6000.0, 4000.0),
            Point3::new(12500.0, 9000.0, 9000.0),
            Point3::new(11300.0, 9000.0, 6200.0),
            Point3::new(9000.0, 6000.0, 4450.0),
            Point3::new(12500.0, 10000.0, 10000.0),
            Point3::new(11300.0, 10000.0, 6850.0),
            Point3::new(9000.0, 6000.0, 4900.0),
            Point3::new(12500.0, 11000.0, 11000.0),
            Point3::new(11300.0, 11000.0, 7400.0),
            Point3::new(9000.0, 6000.0, 5300.0),
            Point3::new(12500.0, 12000.0, 12000.0),
            Point3::new(11300.0, 12000.0, 8000.0),
            Point3::new(9000.0, 6000.0, 5700.0),
            Point3::new(12500.0, 13000.0, 13000.0),
            Point3::new(11300.0, 13000.0, 8500.0),
            Point3::new(9000.0, 6000.0, 6050.0),
            Point3::new(12500.0, 14000.0, 14000.0),
            Point3::new(11300.0, 14000.0, 9000.0),
            Point3::new(9000.0, 6000.0, 6350.0),
        ]),
        Chart::new(vec![
            Point3::new(-2.0, 2000.0, 1800.0),
            Point3::new(0.0, 2000.0, 2000.0),
            Point3::new(2.0, 2000.0, 2300.0),
            Point3::new(-2.0, 3000.0, 2600.0),
            Point3::new(0.0, 3000.0, 3000.0),
            Point3::new(2.0, 3000.0, 3750.0),
            Point3::new(-2.0, 4000.0, 3400.0),
            Point3::new(0.0, 4000.0, 4000.0),
            Point3::new(2.0, 4000.0, 5200.0),
            Point3::new(-2.0, 5000.0, 4200.0),
            Point3::new(0.0, 5000.0, 5000.0),
            Point3::new(2.0, 5000.0, 7200.0),
            Point3::new(-2.0, 6000.0, 4800.0),
            Point3::new(0.0, 6000.0, 6000.0),
            Point3::new(2.0, 6000.0, 9500.0),
            Point3::new(-2.0, 7000.0, 5500.0),
            Point3::new(0.0, 7000.0, 7000.0),
            Point3::new(2.0, 7000.0, 13500.0),
            Point3::new(-2.0, 8000.0, 6200.0),
            Point3::new(0.0, 8000.0, 8000.0),
            Point3::new(1.5, 8000.0, 14000.0),
            Point3::new(-2.0, 9000.0, 6800.0),
            Point3::new(0.0, 9000.0, 9000.0),
            Point3::new(1.25, 9000.0, 14000.0),
            Point3::new(-2.0, 10000.0, 7400.0),
            Point3::new(0.0, 10000.0, 10000.0),
            Point3::new(0.85, 10000.0, 14000.0),
            Point3::new(-2.0, 11000.0, 7900.0),
            Point3::new(0.0, 11000.0, 11000.0),
            Point3::new(0.6, 11000.0, 14000.0),
            Point3::new(-2.0, 12000.0, 8300.0),
            Point3::new(0.0, 12000.0, 12000.0),
            Point3::new(0.4, 12000.0, 14000.0),
            Point3::new(-2.0, 13000.0, 8700.0),
            Point3::new(0.0, 13000.0, 13000.0),
            Point3::new(0.2, 13000.0, 14000.0),
            Point3::new(-2.0, 14000.0, 9100.0),
            Point3::new(0.0, 14000.0, 14000.0),
        ]),
        Chart::new(vec![
            Point3::new(-10.0, 1000.0, 1600.0),
            Point3::new(0.0, 1000.0, 1000.0),
            Point3::new(-10.0, 2000.0, 2500.0),
            Point3::new(0.0, 2000.0, 2000.0),
            Point3::new(30.0, 2000.0, 1600.0),
            Point3::new(-10.0, 3000.0, 3700.0),
            Point3::new(0.0, 3000.0, 3000.0),
            Point3::new(30.0, 3000.0, 2450.0),
            Point3::new(-10.0, 4000.0, 4850.0),
            Point3::new(0.0, 4000.0, 4000.0),
            Point3::new(30.0, 4000.0, 3300.0),
            Point3::new(-10.0, 5000.0, 6000.0),
            Point3::new(0.0, 5000.0, 5000.0),
            Point3::new(30.0, 5000.0, 4200.0),
            Point3::new(-10.0, 6000.0, 7100.0),
            Point3::new(0.0, 6000.0, 6000.0),
            Point3::new(30.0, 6000.0, 5100.0),
            Point3::new(-10.0, 7000.0, 8300.0),
            Point3::new(0.0, 7000.0, 7000.0),
            Point3::new(30.0, 7000.0, 5900.0),
            Point3::new(-10.0, 8000.0, 9400.0),
            Point3::new(0.0, 8000.0, 8000.0),
            Point3::new(30.0, 8000.0, 6800.0),
            Point3::new(-10.0, 9000.0, 10500.0),
            Point3::new(0.0, 9000.0, 10000.0),
            Point3::new(30.0, 10000.0, 7700.0),
            Point3::new(-10.0, 10000.0, 11700.0),
            Point3::new(0.0, 10000.0, 10000.0),
            Point3::new(30.0, 10000.0, 8600.0),
            Point3::new(-10.0, 11000.0, 12800.0),
            Point3::new(0.0, 11000.0, 11000.0),
            Point3::new(30.0, 11000.0, 9500.0),
            Point3::new(-10.0, 12000.0, 13900.0),
            Point3::new(0.0, 12000.0, 12000.0),
            Point3::new(30.0, 12000.0, 10400.0),
            Point3::new(-10.0, 13000.0, 15000.0),
            Point3::new(0.0, 13000.0, 13000.0),
            Point3::new(30.0, 13000.0, 11200.0),
            Point3::new(-5.0, 14000.0, 15000.0),
            Point3::new(0.0, 14000.0, 14000.0),
            Point3::new(30.0, 14000.0, 12200.0),
        ]),
        Chart::new(vec![
            Point3::new(1.0, 1000.0, 1000.0),
            Point3::new(0.85, 1000.0, 1250.0),
            Point3::new(1.0, 2000.0, 2000.0),
            Point3::new(0.85, 2000.0, 2900.0),
            Point3::new(1.0, 3000.0, 3000.0),
            Point3::new(0.85, 3000.0, 4600.0),
            Point3::new(1.0, 4000.0, 4000.0),
            Point3::new(0.85, 4000.0, 6300.0),
            Point3::new(1.0, 5000.0, 5000.0),
            Point3::new(0.85, 5000.0, 8200.0),
            Point3::new(1.0, 6000.0, 6000.0),
            Point3::new(0.85, 6000.0, 10100.0),
            Point3::new(1.0, 7000.0, 7000.0),
            Point3::new(0.85, 7000.0, 12000.0),
            Point3::new(1.0, 8000.0, 8000.0),
            Point3::new(0.85, 8000.0, 13900.0),
            Point3::new(1.0, 9000.0, 9000.0),
            Point3::new(0.875, 9000.0, 15000.0),
            Point3::new(1.0, 10000.0, 10000.0),
            Point3::new(0.92, 10000.0, 15000.0),
            Point3::new(1.0, 11000.0, 11000.0),
            Point3::new(0.952, 11000.0, 15000.0),
            Point3::new(1.0, 12000.0, 12000.0),
            Point3::new(0.972, 12000.0, 15000.0),
            Point3::new(1.0, 13000.0, 13000.0),
            Point3::new(0.983, 13000.0, 15000.0),
            Point3::new(1.0, 14000.0, 14000.0),
            Point3::new(0.99, 14000.0, 15000.0),
        ]),
    ]
});

/// Accelerate-go distance, flaps up, pressure altitude above 10000 ft.
static ACCEL_GO_FLAPS_UP_ABOVE_10K_PA: Lazy<Vec<Chart>> = Lazy::new(|| {
    vec![
        Chart::new(vec![
            Point3::new(-35.0, 10000.0, 2900.0),
            Point3::new(12.0, 10000.0, 4000.0),
            Point3::new(32.0, 10000.0, 6300.0),
            Point3::new(-37.0, 11000.0, 3100.0),
            Point3::new(9.0, 11000.0, 4200.0),
            Point3::new(30.0, 11000.0, 6900.0),
            Point3::new(-39.0, 12000.0, 3300.0),
            Point3::new(6.0, 12000.0, 4500.0),
            Point3::new(28.0, 12000.0, 7700.0),
            Point3::new(-41.0, 13000.0, 3500.0),
            Point3::new(3.0, 13000.0, 4700.0),
            Point3::new(26.0, 13000.0, 8700.0),
            Point3::new(-43.0, 14000.0, 3700.0),
            Point3::new(-1.0, 14000.0, 5000.0),
            Point3::new(24.0, 14000.0, 10500.0),
        ]),
        Chart::new(vec![
            Point3::new(9000.0, 2000.0, 2000.0),
            Point3::new(11300.0, 2000.0, 2600.0),
            Point3::new(12500.0, 2000.0, 3800.0),
            Point3::new(9000.0, 3000.0, 3000.0),
            Point3::new(11300.0, 3000.0, 4100.0),
            Point3::new(12500.0, 3000.0, 5800.0),
            Point3::new(9000.0, 4000.0, 4000.0),
            Point3::new(11300.0, 4000.0, 5550.0),
            Point3::new(12500.0, 4000.0, 8100.0),
            Point3::new(9000.0, 5000.0, 5000.0),
            Point3::new(11300.0, 5000.0, 6900.0),
            Point3::new(12500.0, 5000.0, 10550.0),
            Point3::new(9000.0, 6000.0, 6000.0),
            Point3::new(11300.0, 6000.0, 8600.0),
            Point3::new(12500.0, 6000.0, 13700.0),
            Point3::new(9000.0, 7000.0, 7000.0),
            Point3::new(11300.0, 7000.0, 10400.0),
            Point3::new(12100.0, 7000.0, 15000.0),
            Point3::new(9000.0, 8000.0, 8000.0),
            Point3::new(11300.0, 7000.0, 12300.0),
            Point3::new(11700.0, 8000.0, 15000.0),
            Point3::new(9000.0, 9000.0, 9000.0),
            Point3::new(11300.0, 8000.0, 14800.0),
            Point3::new(11300.0, 9000.0, 15000.0),
            Point3::new(9000.0, 10000.0, 10000.0),
            Point3::new(10800.0, 10000.0, 15000.0),
            Point3::new(9000.0, 11000.0, 11000.0),
            Point3::new(10350.0, 11000.0, 15000.0),
        ]),
        Chart::new(vec![
            Point3::new(-2.0, 2000.0, 1800.0),
            Point3::new(0.0, 2000.0, 2000.0),
            Point3::new(2.0, 2000.0, 2300.0),
            Point3::new(-2.0, 3000.0, 2600.0),
            Point3::new(0.0, 3000.0, 3000.0),
            Point3::new(2.0, 3000.0, 3700.0),
            Point3::new(-2.0, 4000.0, 3400.0),
            Point3::new(0.0, 4000.0, 4000.0),
            Point3::new(2.0, 4000.0, 5200.0),
            Point3::new(-2.0, 5000.0, 4200.0),
            Point3::new(0.0, 5000.0, 5000.0),
            Point3::new(2.0, 5000.0, 7200.0),
            Point3::new(-2.0, 6000.0, 4800.0),
            Point3::new(0.0, 6000.0, 6000.0),
            Point3::new(2.0, 6000.0, 9500.0),
            Point3::new(-2.0, 7000.0, 5500.0),
            Point3::new(0.0, 7000.0, 7000.0),
            Point3::new(2.0, 7000.0, 13200.0),
            Point3::new(-2.0, 8000.0, 6200.0),
            Point3::new(0.0, 8000.0, 8000.0),
            Point3::new(1.5, 8000.0, 14000.0),
            Point3::new(-2.0, 9000.0, 6800.0),
            Point3::new(0.0, 9000.0, 9000.0),
            Point3::new(1.2, 9000.0, 14000.0),
            Point3::new(-2.0, 10000.0, 7200.0),
            Point3::new(0.0, 10000.0, 10000.0),
            Point3::new(0.8, 10000.0, 14000.0),
            Point3::new(-2.0, 11000.0, 7800.0),
            Point3::new(0.0, 11000.0, 11000.0),
            Point3::new(0.55, 11000.0, 14000.0),
            Point3::new(-2.0, 12000.0, 8300.0),
            Point3::new(0.0, 12000.0, 12000.0),
            Point3::new(0.25, 12000.0, 14000.0),
            Point3::new(-2.0, 13000.0, 8700.0),
            Point3::new(0.0, 13000.0, 13000.0),
            Point3::new(0.1, 13000.0, 14000.0),
            Point3::new(-2.0, 14000.0, 9050.0),
            Point3::new(0.0, 14000.0, 14000.0),
        ]),
        Chart::new(vec![
            Point3::new(-10.0, 1000.0, 1300.0),
            Point3::new(0.0, 1000.0, 1000.0),
            Point3::new(-10.0, 2000.0, 2450.0),
            Point3::new(0.0, 2000.0, 2000.0),
            Point3::new(30.0, 2000.0, 1600.0),
            Point3::new(-10.0, 3000.0, 3600.0),
            Point3::new(0.0, 3000.0, 3000.0),
            Point3::new(30.0, 3000.0, 2400.0),
            Point3::new(-10.0, 4000.0, 4800.0),
            Point3::new(0.0, 4000.0, 4000.0),
            Point3::new(30.0, 4000.0, 3300.0),
            Point3::new(-10.0, 5000.0, 5950.0),
            Point3::new(0.0, 5000.0, 5000.0),
            Point3::new(30.0, 5000.0, 4200.0),
            Point3::new(-10.0, 6000.0, 7100.0),
            Point3::new(0.0, 6000.0, 6000.0),
            Point3::new(30.0, 6000.0, 5050.0),
            Point3::new(-10.0, 7000.0, 8200.0),
            Point3::new(0.0, 7000.0, 7000.0),
            Point3::new(30.0, 7000.0, 5950.0),
            Point3::new(-10.0, 8000.0, 9400.0),
            Point3::new(0.0, 8000.0, 8000.0),
            Point3::new(30.0, 8000.0, 6800.0),
            Point3::new(-10.0, 9000.0, 10500.0),
            Point3::new(0.0, 9000.0, 9000.0),
            Point3::new(30.0, 9000.0, 7700.0),
            Point3::new(-10.0, 10000.0, 11600.0),
            Point3::new(0.0, 10000.0, 10000.0),
            Point3::new(30.0, 10000.0, 8600.0),
            Point3::new(-10.0, 11000.0, 12750.0),
            Point3::new(0.0, 11000.0, 11000.0),
            Point3::new(30.0, 11000.0, 9500.0),
            Point3::new(-10.0, 12000.0, 13900.0),
            Point3::new(0.0, 12000.0, 12000.0),
            Point3::new(30.0, 12000.0, 10400.0),
            Point3::new(-10.0, 13000.0, 15000.0),
            Point3::new(0.0, 13000.0, 13000.0),
            Point3::new(30.0, 13000.0, 11200.0),
            Point3::new(-5.0, 14000.0, 15000.0),
            Point3::new(0.0, 14000.0, 14000.0),
            Point3::new(30.0, 14000.0, 12100.0),
        ]),
        Chart::new(vec![
            Point3::new(1.0, 1000.0, 1000.0),
            Point3::new(0.85, 1000.0, 1250.0),
            Point3::new(1.0, 2000.0, 2000.0),
            Point3::new(0.85, 2000.0, 2900.0),
            Point3::new(1.0, 3000.0, 3000.0),
            Point3::new(0.85, 3000.0, 4600.0),
            Point3::new(1.0, 4000.0, 4000.0),
            Point3::new(0.85, 4000.0, 6350.0),
            Point3::new(1.0, 5000.0, 5000.0),
            Point3::new(0.85, 5000.0, 8150.0),
            Point3::new(1.0, 6000.0, 6000.0),
            Point3::new(0.85, 6000.0, 10050.0),
            Point3::new(1.0, 7000.0, 7000.0),
            Point3::new(0.85, 7000.0, 12000.0),
            Point3::new(1.0, 8000.0, 8000.0),
            Point3::new(0.85, 8000.0, 13900.0),
            Point3::new(1.0, 9000.0, 9000.0),
            Point3::new(0.87, 9000.0, 15000.0),
            Point3::new(1.0, 10000.0, 10000.0),
            Point3::new(0.925, 10000.0, 15000.0),
            Point3::new(1.0, 11000.0, 11000.0),
            Point3::new(0.957, 11000.0, 15000.0),
            Point3::new(1.0, 12000.0, 12000.0),
            Point3::new(0.975, 12000.0, 15000.0),
            Point3::new(1.0, 13000.0, 13000.0),
            Point3::new(0.988, 13000.0, 15000.0),
            Point3::new(1.0, 14000.0, 14000.0),
            Point3::new(0.995, 14000.0, 15000.0),
        ]),
    ]
});

/// Landing distance, no reverse thrust, flaps down, dry runway.
static LANDING_NO_REV_FLAPS_DOWN_DRY: Lazy<Vec<Chart>> = Lazy::new(|| {
    vec![
        Chart::new(vec![
            Point3::new(-15.0, 0.0, 2550.0),
            Point3::new(52.0, 0.0, 3200.0),
            Point3::new(-19.5, 2000.0, 2700.0),
            Point3::new(48.0, 2000.0, 3450.0),
            Point3::new(-23.0, 4000.0, 2850.0),
            Point3::new(44.0, 4000.0, 3650.0),
            Point3::new(-28.0, 6000.0, 3050.0),
            Point3::new(40.0, 6000.0, 3900.0),
            Point3::new(-31.0, 8000.0, 3200.0),
            Point3::new(37.0, 8000.0, 4200.0),
            Point3::new(-35.0, 10000.0, 3400.0),
            Point3::new(32.0, 10000.0, 4500.0),
        ]),
        Chart::new(vec![
            Point3::new(12500.0, 2500.0, 2500.0),
            Point3::new(9000.0, 2500.0, 2000.0),
            Point3::new(12500.0, 2750.0, 2750.0),
            Point3::new(9000.0, 2750.0, 2200.0),
            Point3::new(12500.0, 3000.0, 3000.0),
            Point3::new(9000.0, 3000.0, 2400.0),
            Point3::new(12500.0, 3250.0, 3250.0),
            Point3::new(9000.0, 3250.0, 2600.0),
            Point3::new(12500.0, 3500.0, 3500.0),
            Point3::new(9000.0, 3500.0, 2800.0),
            Point3::new(12500.0, 3750.0, 3750.0),
            Point3::new(9000.0, 3750.0, 2950.0),
            Point3::new(12500.0, 4000.0, 4000.0),
            Point3::new(9000.0, 4000.0, 3150.0),
            Point3::new(12500.0, 4250.0, 4250.0),
            Point3::new(9000.0, 4250.0, 3300.0),
            Point3::new(12500.0, 4500.0, 4500.0),
            Point3::new(9000.0, 4500.0, 3500.0),
        ]),
        Chart::new(vec![
            Point3::new(2.0, 2000.0, 1800.0),
            Point3::new(0.0, 2000.0, 2000.0),
            Point3::new(-2.0, 2000.0, 2300.0),
            Point3::new(2.0, 2400.0, 2150.0),
            Point3::new(0.0, 2400.0, 2400.0),
            Point3::new(-2.0, 2400.0, 2750.0),
            Point3::new(2.0, 2800.0, 2500.0),
            Point3::new(0.0, 2800.0, 2800.0),
            Point3::new(-2.0, 2800.0, 3200.0),
            Point3::new(2.0, 3150.0, 2850.0),
            Point3::new(0.0, 3150.0, 3150.0),
            Point3::new(-2.0, 3150.0, 3600.0),
            Point3::new(2.0, 3500.0, 3200.0),
            Point3::new(0.0, 3500.0, 3500.0),
            Point3::new(-2.0, 3500.0, 4050.0),
            Point3::new(2.0, 3800.0, 3500.0),
            Point3::new(0.0, 3800.0, 3800.0),
            Point3::new(-2.0, 3800.0, 4500.0),
            Point3::new(2.0, 4300.0, 3900.0),
            Point3::new(0.0, 4300.0, 4300.0),
            Point3::new(-2.0, 4300.0, 4900.0),
            Point3::new(2.0, 4650.0, 4200.0),
            Point3::new(0.0, 4650.0, 4650.0),
            Point3::new(-2.0, 4650.0, 5300.0),
        ]),
        Chart::new(vec![
            Point3::new(-10.0, 1800.0, 2400.0),
            Point3::new(0.0, 1800.0, 1800.0),
            Point3::new(30.0, 1800.0, 1300.0),
            Point3::new(-10.0, 2300.0, 3200.0),
            Point3::new(0.0, 2300.0, 2300.0),
            Point3::new(30.0, 2300.0, 1750.0),
            Point3::new(-10.0, 2850.0, 3750.0),
            Point3::new(0.0, 2850.0, 2850.0),
            Point3::new(30.0, 2850.0, 2200.0),
            Point3::new(-10.0, 3400.0, 4400.0),
            Point3::new(0.0, 3400.0, 3400.0),
            Point3::new(30.0, 3400.0, 2600.0),
            Point3::new(-10.0, 3900.0, 5000.0),
            Point3::new(0.0, 3900.0, 3900.0),
            Point3::new(30.0, 3900.0, 3100.0),
            Point3::new(-10.0, 4400.0, 5600.0),
            Point3::new(0.0, 4400.0, 4400.0),
            Point3::new(30.0, 4400.0, 3500.0),
            Point3::new(-10.0, 5000.0, 6200.0),
            Point3::new(0.0, 5000.0, 5000.0),
            Point3::new(30.0, 5000.0, 3900.0),
            Point3::new(-10.0, 5500.0, 6600.0),
            Point3::new(0.0, 5500.0, 5500.0),
            Point3::new(30.0, 5500.0, 4300.0),
        ]),
        Chart::new(vec![
            Point3::new(50.0, 1300.0, 1300.0),
            Point3::new(0.0, 1300.0, 800.0),
            Point3::new(50.0, 1850.0, 1850.0),
            Point3::new(0.0, 1850.0, 1200.0),
            Point3::new(50.0, 2400.0, 2400.0),
            Point3::new(0.0, 2400.0, 1650.0),
            Point3::new(50.0, 2950.0, 2950.0),
            Point3::new(0.0, 2950.0, 2100.0),
            Point3::new(50.0, 3500.0, 3500.0),
            Point3::new(0.0, 3500.0, 2450.0),
            Point3::new(50.0, 4050.0, 4050.0),
            Point3::new(0.0, 4050.0, 2750.0),
            Point3::new(50.0, 4600.0, 4600.0),
            Point3::new(0.0, 4600.0, 3050.0),
            Point3::new(50.0, 5150.0, 5150.0),
            Point3::new(0.0, 5150.0, 3300.0),
            Point3::new(50.0, 5700.0, 5700.0),
            Point3::new(0.0, 5700.0, 3500.0),
            Point3::new(50.0, 6250.0, 6250.0),
            Point3::new(0.0, 6250.0, 3750.0),
            Point3::new(50.0, 6700.0, 6700.0),
            Point3::new(0.0, 6700.0, 4000.0),
        ]),
    ]
});

/// Landing distance, no reverse thrust, flaps down, wet runway.
static LANDING_NO_REV_FLAPS_DOWN_WET: Lazy<Vec<Chart>> = Lazy::new(|| {
    vec![
        Chart::new(vec![
            Point3::new(-15.0, 0.0, 3600.0),
            Point3::new(52.0, 0.0, 4600.0),
            Point3::new(-19.0, 2000.0, 3800.0),
            Point3::new(48.0, 2000.0, 4850.0),
            Point3::new(-23.0, 4000.0, 4100.0),
            Point3::new(44.0, 4000.0, 5200.0),
            Point3::new(-27.0, 6000.0, 4300.0),
            Point3::new(40.0, 6000.0, 5500.0),
            Point3::new(-31.0, 8000.0, 4550.0),
            Point3::new(36.0, 8000.0, 5900.0),
            Point3::new(-35.0, 10000.0, 4900.0),
            Point3::new(32.0, 10000.0, 6300.0),
        ]),
        Chart::new(vec![
            Point3::new(12500.0, 3600.0, 3600.0),
            Point3::new(9000.0, 3600.0, 2950.0),
            Point3::new(12500.0, 3950.0, 3950.0),
            Point3::new(9000.0, 3950.0, 3200.0),
            Point3::new(12500.0, 4300.0, 4300.0),
            Point3::new(9000.0, 4300.0, 3500.0),
            Point3::new(12500.0, 4650.0, 4650.0),
            Point3::new(9000.0, 4650.0, 3750.0),
            Point3::new(12500.0, 5000.0, 5000.0),
            Point3::new(9000.0, 5000.0, 4000.0),
            Point3::new(12500.0, 5350.0, 5350.0),
            Point3::new(9000.0, 5350.0, 4300.0),
            Point3::new(12500.0, 5700.0, 5700.0),
            Point3::new(9000.0, 5700.0, 4550.0),
            Point3::new(12500.0, 6050.0, 6050.0),
            Point3::new(9000.0, 6050.0, 4800.0),
            Point3::new(12500.0, 6400.0, 6400.0),
            Point3::new(9000.0, 6400.0, 5100.0),
        ]),
        Chart::new(vec![
            Point3::new(0.0, 2900.0, 2900.0),
            Point3::new(2.0, 2900.0, 2500.0),
            Point3::new(-2.0, 2900.0, 3450.0),
            Point3::new(0.0, 3400.0, 3400.0),
            Point3::new(2.0, 3400.0, 3000.0),
            Point3::new(-2.0, 3400.0, 4000.0),
            Point3::new(0.0, 3900.0, 3900.0),
            Point3::new(2.0, 3900.0, 3400.0),
            Point3::new(-2.0, 3900.0, 4600.0),
            Point3::new(0.0, 4400.0, 4400.0),
            Point3::new(2.0, 4400.0, 3850.0),
            Point3::new(-2.0, 4400.0, 5200.0),
            Point3::new(0.0, 4900.0, 4900.0),
            Point3::new(2.0, 4900.0, 4300.0),
            Point3::new(-2.0, 4900.0, 5800.0),
            Point3::new(0.0, 5400.0, 5400.0),
            Point3::new(2.0, 5400.0, 4700.0),
            Point3::new(-2.0, 5400.0, 6450.0),
            Point3::new(0.0, 5900.0, 5900.0),
            Point3::new(2.0, 5900.0, 5200.0),
            Point3::new(-2.0, 5900.0, 7000.0),
            Point3::new(0.0, 6400.0, 6400.0),
            Point3::new(2.0, 6400.0, 5600.0),
            Point3::new(-2.0, 6400.0, 7600.0),
        ]),
        Chart::new(vec![
            Point3::new(0.0, 2500.0, 2500.0),
            Point3::new(-10.0, 2500.0, 3400.0),
            Point3::new(30.0, 2500.0, 1800.0),
            Point3::new(0.0, 3200.0, 3200.0),
            Point3::new(-10.0, 3200.0, 4350.0),
            Point3::new(30.0, 3200.0, 2400.0),
            Point3::new(0.0, 3950.0, 3950.0),
            Point3::new(-10.0, 3950.0, 5300.0),
            Point3::new(30.0, 3950.0, 3000.0),
            Point3::new(0.0, 4700.0, 4700.0),
            Point3::new(-10.0, 4700.0, 6150.0),
            Point3::new(30.0, 4700.0, 3600.0),
            Point3::new(0.0, 5400.0, 5400.0),
            Point3::new(-10.0, 5400.0, 7000.0),
            Point3::new(30.0, 5400.0, 4200.0),
            Point3::new(0.0, 6150.0, 6150.0),
            Point3::new(-10.0, 6150.0, 7800.0),
            Point3::new(30.0, 6150.0, 4800.0),
            Point3::new(0.0, 6850.0, 6850.0),
            Point3::new(-10.0, 6850.0, 8650.0),
            Point3::new(30.0, 6850.0, 5350.0),
            Point3::new(0.0, 7600.0, 7600.0),
            Point3::new(-10.0, 7600.0, 9450.0),
            Point3::new(30.0, 7600.0, 5900.0),
        ]),
        Chart::new(vec![
            Point3::new(50.0, 1800.0, 1800.0),
            Point3::new(0.0, 1800.0, 1300.0),
            Point3::new(50.0, 2600.0, 2600.0),
            Point3::new(0.0, 2600.0, 1950.0),
            Point3::new(50.0, 3400.0, 3400.0),
            Point3::new(0.0, 3400.0, 2650.0),
            Point3::new(50.0, 4200.0, 4200.0),
            Point3::new(0.0, 4200.0, 3400.0),
            Point3::new(50.0, 5000.0, 5000.0),
            Point3::new(0.0, 5000.0, 3950.0),
            Point3::new(50.0, 5800.0, 5800.0),
            Point3::new(0.0, 5800.0, 4500.0),
            Point3::new(50.0, 6600.0, 6600.0),
            Point3::new(0.0, 6600.0, 5100.0),
            Point3::new(50.0, 7400.0, 7400.0),
            Point3::new(0.0, 7400.0, 5600.0),
            Point3::new(50.0, 8200.0, 8200.0),
            Point3::new(0.0, 8200.0, 6100.0),
            Point3::new(50.0, 9000.0, 9000.0),
            Point3::new(0.0, 9000.0, 6550.0),
            Point3::new(50.0, 9800.0, 9800.0),
            Point3::new(0.0, 9800.0, 7000.0),
        ]),
    ]
});

/// Landing distance, reverse thrust, flaps down, dry runway.
static LANDING_WITH_REV_FLAPS_DOWN_DRY: Lazy<Vec<Chart>> = Lazy::new(|| {
    vec![
        Chart::new(vec![
            Point3::new(-15.0, 0.0, 1850.0),
            Point3::new(52.0, 0.0, 2350.0),
            Point3::new(-19.0, 2000.0, 1975.0),
            Point3::new(48.0, 2000.0, 2500.0),
            Point3::new(-23.0, 4000.0, 2100.0),
            Point3::new(44.0, 4000.0, 2700.0),
            Point3::new(-27.0, 6000.0, 2225.0),
            Point3::new(40.0, 6000.0, 2900.0),
            Point3::new(-31.0, 8000.0, 2350.0),
            Point3::new(36.0, 8000.0, 3100.0),
            Point3::new(-35.0, 10000.0, 2525.0),
            Point3::new(32.0, 10000.0, 3325.0),
        ]),
        Chart::new(vec![
            Point3::new(12500.0, 1800.0, 1800.0),
            Point3::new(9000.0, 1800.0, 1450.0),
            Point3::new(12500.0, 2000.0, 2000.0),
            Point3::new(9000.0, 2000.0, 1600.0),
            Point3::new(12500.0, 2200.0, 2200.0),
            Point3::new(9000.0, 2200.0, 1725.0),
            Point3::new(12500.0, 2400.0, 2400.0),
            Point3::new(9000.0, 2400.0, 1875.0),
            Point3::new(12500.0, 2600.0, 2600.0),
            Point3::new(9000.0, 2600.0, 2000.0),
            Point3::new(12500.0, 2800.0, 2800.0),
            Point3::new(9000.0, 2800.0, 2150.0),
            Point3::new(12500.0, 3000.0, 3000.0),
            Point3::new(9000.0, 3000.0, 2300.0),
            Point3::new(12500.0, 3200.0, 3200.0),
            Point3::new(9000.0, 3200.0, 2425.0),
            Point3::new(12500.0, 3400.0, 3400.0),
            Point3::new(9000.0, 3400.0, 2575.0),
        ]),
        Chart::new(vec![
            Point3::new(0.0, 1400.0, 1400.0),
            Point3::new(2.0, 1400.0, 1300.0),
            Point3::new(-2.0, 1400.0, 1550.0),
            Point3::new(0.0, 1700.0, 1700.0),
            Point3::new(2.0, 1700.0, 1575.0),
            Point3::new(-2.0, 1700.0, 1875.0),
            Point3::new(0.0, 2000.0, 2000.0),
            Point3::new(2.0, 2000.0, 1750.0),
            Point3::new(-2.0, 2000.0, 2200.0),
            Point3::new(0.0, 2300.0, 2300.0),
            Point3::new(2.0, 2300.0, 2150.0),
            Point3::new(-2.0, 2300.0, 2550.0),
            Point3::new(0.0, 2600.0, 2600.0),
            Point3::new(2.0, 2600.0, 2425.0),
            Point3::new(-2.0, 2600.0, 2375.0),
            Point3::new(0.0, 2900.0, 2900.0),
            Point3::new(2.0, 2900.0, 2700.0),
            Point3::new(-2.0, 2900.0, 3200.0),
            Point3::new(0.0, 3200.0, 3200.0),
            Point3::new(2.0, 3200.0, 2975.0),
            Point3::new(-2.0, 3200.0, 3525.0),
            Point3::new(0.0, 3500.0, 3500.0),
            Point3::new(2.0, 3500.0, 3250.0),
            Point3::new(-2.0, 3500.0, 3850.0),
        ]),
        Chart::new(vec![
            Point3::new(0.0, 1300.0, 1300.0),
            Point3::new(-10.0, 1300.0, 1750.0),
            Point3::new(30.0, 1300.0, 950.0),
            Point3::new(0.0, 1675.0, 1675.0),
            Point3::new(-10.0, 1675.0, 2200.0),
            Point3::new(30.0, 1675.0, 1250.0),
            Point3::new(0.0, 2050.0, 2050.0),
            Point3::new(-10.0, 2050.0, 2650.0),
            Point3::new(30.0, 2050.0, 1575.0),
            Point3::new(0.0, 2425.0, 2425.0),
            Point3::new(-10.0, 2425.0, 3100.0),
            Point3::new(30.0, 2425.0, 1900.0),
            Point3::new(0.0, 2800.0, 2800.0),
            Point3::new(-10.0, 2800.0, 3550.0),
            Point3::new(30.0, 2800.0, 2225.0),
            Point3::new(0.0, 3175.0, 3175.0),
            Point3::new(-10.0, 3175.0, 3975.0),
            Point3::new(30.0, 3175.0, 2525.0),
            Point3::new(0.0, 3550.0, 3550.0),
            Point3::new(-10.0, 3550.0, 4400.0),
            Point3::new(30.0, 3550.0, 2800.0),
            Point3::new(0.0, 3425.0, 3425.0),
            Point3::new(-10.0, 3425.0, 4800.0),
            Point3::new(30.0, 3425.0, 3100.0),
        ]),
        Chart::new(vec![
            Point3::new(50.0, 900.0, 900.0),
            Point3::new(0.0, 900.0, 450.0),
            Point3::new(50.0, 1300.0, 1300.0),
            Point3::new(0.0, 1300.0, 750.0),
            Point3::new(50.0, 1700.0, 1700.0),
            Point3::new(0.0, 1700.0, 1050.0),
            Point3::new(50.0, 2100.0, 2100.0),
            Point3::new(0.0, 2100.0, 1300.0),
            Point3::new(50.0, 2500.0, 2500.0),
            Point3::new(0.0, 2500.0, 1550.0),
            Point3::new(50.0, 2900.0, 2900.0),
            Point3::new(0.0, 2900.0, 1775.0),
            Point3::new(50.0, 3300.0, 3300.0),
            Point3::new(0.0, 3300.0, 1950.0),
            Point3::new(50.0, 3700.0, 3700.0),
            Point3::new(0.0, 3700.0, 2075.0),
            Point3::new(50.0, 4100.0, 4100.0),
            Point3::new(0.0, 4100.0, 2200.0),
            Point3::new(50.0, 4500.0, 4500.0),
            Point3::new(0.0, 4500.0, 2325.0),
            Point3::new(50.0, 4900.0, 4900.0),
            Point3::new(0.0, 4900.0, 2450.0),
        ]),
    ]
});

/// Landing distance, reverse thrust, flaps down, wet runway.
static LANDING_WITH_REV_FLAPS_DOWN_WET: Lazy<Vec<Chart>> = Lazy::new(|| {
    vec![
        Chart::new(vec![
            Point3::new(-15.0, 0.0, 2700.0),
            Point3::new(52.0, 0.0, 3400.0),
            Point3::new(-19.0, 2000.0, 2850.0),
            Point3::new(48.0, 2000.0, 3650.0),
            Point3::new(-23.0, 4000.0, 3025.0),
            Point3::new(44.0, 4000.0, 3900.0),
            Point3::new(-27.0, 6000.0, 3200.0),
            Point3::new(40.0, 6000.0, 4150.0),
            Point3::new(-31.0, 8000.0, 3425.0),
            Point3::new(36.0, 8000.0, 4450.0),
            Point3::new(-35.0, 1000.0, 3650.0),
            Point3::new(32.0, 10000.0, 4750.0),
        ]),
        Chart::new(vec![
            Point3::new(12500.0, 2700.0, 2700.0),
            Point3::new(9000.0, 2700.0, 2200.0),
            Point3::new(12500.0, 2975.0, 2975.0),
            Point3::new(9000.0, 2975.0, 2400.0),
            Point3::new(12500.0, 3250.0, 3250.0),
            Point3::new(9000.0, 3250.0, 2600.0),
            Point3::new(12500.0, 3525.0, 3525.0),
            Point3::new(9000.0, 3525.0, 2800.0),
            Point3::new(12500.0, 3800.0, 3800.0),
            Point3::new(9000.0, 3800.0, 3000.0),
            Point3::new(12500.0, 4075.0, 4075.0),
            Point3::new(9000.0, 4075.0, 3200.0),
            Point3::new(12500.0, 4350.0, 4350.0),
            Point3::new(9000.0, 4350.0, 3400.0),
            Point3::new(12500.0, 4625.0, 4625.0),
            Point3::new(9000.0, 4625.0, 3600.0),
            Point3::new(12500.0, 4400.0, 4400.0),
            Point3::new(9000.0, 4400.0, 3800.0),
        ]),
        Chart::new(vec![
            Point3::new(0.0, 2100.0, 2100.0),
            Point3::new(2.0, 2100.0, 1900.0),
            Point3::new(-2.0, 2100.0, 2350.0),
            Point3::new(0.0, 2500.0, 2500.0),
            Point3::new(2.0, 2500.0, 2275.0),
            Point3::new(-2.0, 2500.0, 2825.0),
            Point3::new(0.0, 2900.0, 2900.0),
            Point3::new(2.0, 2900.0, 2650.0),
            Point3::new(-2.0, 2900.0, 3275.0),
            Point3::new(0.0, 3300.0, 3300.0),
            Point3::new(2.0, 3300.0, 3000.0),
            Point3::new(-2.0, 3300.0, 3725.0),
            Point3::new(0.0, 3700.0, 3700.0),
            Point3::new(2.0, 3700.0, 3350.0),
            Point3::new(-2.0, 3700.0, 4200.0),
            Point3::new(0.0, 4100.0, 4100.0),
            Point3::new(2.0, 4100.0, 3725.0),
            Point3::new(-2.0, 4100.0, 4625.0),
            Point3::new(0.0, 4500.0, 4500.0),
            Point3::new(2.0, 4500.0, 4100.0),
            Point3::new(-2.0, 4500.0, 5050.0),
            Point3::new(0.0, 4900.0, 4900.0),
            Point3::new(2.0, 4900.0, 4475.0),
            Point3::new(-2.0, 4900.0, 5500.0),
        ]),
        Chart::new(vec![
            Point3::new(0.0, 1950.0, 1950.0),
            Point3::new(-10.0, 1950.0, 2650.0),
            Point3::new(30.0, 1950.0, 1400.0),
            Point3::new(0.0, 2450.0, 2450.0),
            Point3::new(-10.0, 2450.0, 3325.0),
            Point3::new(30.0, 2450.0, 1825.0),
            Point3::new(0.0, 3000.0, 3000.0),
            Point3::new(-10.0, 3000.0, 3975.0),
            Point3::new(30.0, 3000.0, 2275.0),
            Point3::new(0.0, 3500.0, 3500.0),
            Point3::new(-10.0, 3500.0, 4575.0),
            Point3::new(30.0, 3500.0, 2725.0),
            Point3::new(0.0, 4050.0, 4050.0),
            Point3::new(-10.0, 4050.0, 5200.0),
            Point3::new(30.0, 4050.0, 3175.0),
            Point3::new(0.0, 4600.0, 4600.0),
            Point3::new(-10.0, 4600.0, 5800.0),
            Point3::new(30.0, 4600.0, 3600.0),
            Point3::new(0.0, 5100.0, 5100.0),
            Point3::new(-10.0, 5100.0, 6375.0),
            Point3::new(30.0, 5100.0, 4000.0),
            Point3::new(0.0, 5625.0, 5625.0),
            Point3::new(-10.0, 5625.0, 7000.0),
            Point3::new(30.0, 5625.0, 4375.0),
        ]),
        Chart::new(vec![
            Point3::new(50.0, 1400.0, 1400.0),
            Point3::new(0.0, 1400.0, 925.0),
            Point3::new(50.0, 1950.0, 1950.0),
            Point3::new(0.0, 1950.0, 1400.0),
            Point3::new(50.0, 2500.0, 2500.0),
            Point3::new(0.0, 2500.0, 1825.0),
            Point3::new(50.0, 3050.0, 3050.0),
            Point3::new(0.0, 3050.0, 2300.0),
            Point3::new(50.0, 3600.0, 3600.0),
            Point3::new(0.0, 3600.0, 2675.0),
            Point3::new(50.0, 4150.0, 4150.0),
            Point3::new(0.0, 4150.0, 3050.0),
            Point3::new(50.0, 4700.0, 4700.0),
            Point3::new(0.0, 4700.0, 3425.0),
            Point3::new(50.0, 5250.0, 5250.0),
            Point3::new(0.0, 5250.0, 3750.0),
            Point3::new(50.0, 5800.0, 5800.0),
            Point3::new(0.0, 5800.0, 4050.0),
            Point3::new(50.0, 6350.0, 6350.0),
            Point3::new(0.0, 6350.0, 4325.0),
            Point3::new(50.0, 6900.0, 6900.0),
            Point3::new(0.0, 6900.0, 4600.0),
        ]),
    ]
});

/// One-engine-inoperative climb rate.
static CLIMB_ONE_ENGINE_INOP: Lazy<Vec<Chart>> = Lazy::new(|| {
    vec![
        Chart::new(vec![
            Point3::new(-15.0, 0.0, 750.0),
            Point3::new(43.0, 0.0, 550.0),
            Point3::new(52.0, 0.0, 410.0),
            Point3::new(-19.0, 2000.0, 730.0),
            Point3::new(38.0, 2000.0, 520.0),
            Point3::new(48.0, 2000.0, 370.0),
            Point3::new(-23.0, 4000.0, 710.0),
            Point3::new(32.0, 4000.0, 500.0),
            Point3::new(44.0, 4000.0, 330.0),
            Point3::new(-27.0, 6000.0, 680.0),
            Point3::new(27.0, 6000.0, 480.0),
            Point3::new(40.0, 6000.0, 280.0),
            Point3::new(-31.0, 8000.0, 660.0),
            Point3::new(20.0, 8000.0, 460.0),
            Point3::new(36.0, 8000.0, 230.0),
            Point3::new(-35.0, 10000.0, 640.0),
            Point3::new(14.0, 10000.0, 440.0),
            Point3::new(32.0, 10000.0, 170.0),
            Point3::new(-39.0, 12000.0, 600.0),
            Point3::new(7.0, 12000.0, 420.0),
            Point3::new(28.0, 12000.0, 100.0),
            Point3::new(-43.0, 14000.0, 570.0),
            Point3::new(-1.0, 14000.0, 400.0),
            Point3::new(24.0, 14000.0, 40.0),
            Point3::new(-47.0, 16000.0, 530.0),
            Point3::new(-8.0, 16000.0, 380.0),
            Point3::new(20.0, 16000.0, -30.0),
            Point3::new(-51.0, 18000.0, 500.0),
            Point3::new(-17.0, 18000.0, 360.0),
            Point3::new(16.5, 18000.0, -100.0),
            Point3::new(-54.0, 20000.0, 460.0),
            Point3::new(-25.0, 20000.0, 320.0),
            Point3::new(12.5, 20000.0, -170.0),
            Point3::new(-54.0, 22000.0, 380.0),
            Point3::new(-28.5, 22000.0, 210.0),
            Point3::new(8.5, 22000.0, -230.0),
            Point3::new(-54.0, 24000.0, 250.0),
            Point3::new(-32.5, 24000.0, 100.0),
            Point3::new(4.5, 24000.0, -290.0),
            Point3::new(-54.0, 26000.0, 100.0),
            Point3::new(-36.5, 26000.0, 0.0),
            Point3::new(-5.5, 26000.0, -310.0),
            Point3::new(-54.0, 28000.0, -30.0),
            Point3::new(-40.5, 28000.0, -120.0),
            Point3::new(-9.5, 28000.0, -410.0),
            Point3::new(-54.0, 30000.0, -160.0),
            Point3::new(-44.5, 30000.0, -220.0),
            Point3::new(-13.5, 30000.0, -520.0),
            Point3::new(-54.0, 32000.0, -320.0),
            Point3::new(-48.0, 32000.0, -350.0),
            Point3::new(-17.5, 32000.0, -610.0),
        ]),
        Chart::new(vec![
            Point3::new(12500.0, -800.0, -800.0),
            Point3::new(9000.0, -800.0, -520.0),
            Point3::new(12500.0, -600.0, -600.0),
            Point3::new(9000.0, -600.0, -320.0),
            Point3::new(12500.0, -400.0, -400.0),
            Point3::new(9000.0, -400.0, -80.0),
            Point3::new(12500.0, -200.0, -200.0),
            Point3::new(9000.0, -200.0, 140.0),
            Point3::new(12500.0, 0.0, 0.0),
            Point3::new(9000.0, 0.0, 380.0),
            Point3::new(12500.0, 200.0, 200.0),
            Point3::new(9000.0, 200.0, 610.0),
            Point3::new(12500.0, 400.0, 400.0),
            Point3::new(9000.0, 400.0, 840.0),
            Point3::new(12500.0, 600.0, 600.0),
            Point3::new(9000.0, 600.0, 1120.0),
            Point3::new(12500.0, 800.0, 800.0),
            Point3::new(9000.0, 800.0, 1360.0),
        ]),
    ]
});

/// Accelerate-stop distance in feet, flaps up, dry runway.
///
/// Inputs: OAT in °C, pressure altitude in feet, takeoff weight in pounds,
/// runway slope in percent, wind component in knots, V1/VR ratio.
pub fn accel_stop_flaps_up_dry(
    oat: f64,
    pa: f64,
    weight: f64,
    slope: f64,
    wind: f64,
    v1_vr_ratio: f64,
) -> Option<f64> {
    solve_chain(
        &ACCEL_STOP_FLAPS_UP_DRY,
        &[oat, pa, weight, slope, wind, v1_vr_ratio],
    )
}

/// Accelerate-stop distance in feet, flaps up, wet runway. Inputs as
/// [`accel_stop_flaps_up_dry`].
pub fn accel_stop_flaps_up_wet(
    oat: f64,
    pa: f64,
    weight: f64,
    slope: f64,
    wind: f64,
    v1_vr_ratio: f64,
) -> Option<f64> {
    solve_chain(
        &ACCEL_STOP_FLAPS_UP_WET,
        &[oat, pa, weight, slope, wind, v1_vr_ratio],
    )
}

/// Accelerate-go distance in feet, flaps up, for pressure altitudes at or
/// below 10000 ft. Inputs as [`accel_stop_flaps_up_dry`].
pub fn accel_go_flaps_up_below_10k_pa(
    oat: f64,
    pa: f64,
    weight: f64,
    slope: f64,
    wind: f64,
    v1_vr_ratio: f64,
) -> Option<f64> {
    solve_chain(
        &ACCEL_GO_FLAPS_UP_BELOW_10K_PA,
        &[oat, pa, weight, slope, wind, v1_vr_ratio],
    )
}

/// Accelerate-go distance in feet, flaps up, for pressure altitudes above
/// 10000 ft. Inputs as [`accel_stop_flaps_up_dry`].
pub fn accel_go_flaps_up_above_10k_pa(
    oat: f64,
    pa: f64,
    weight: f64,
    slope: f64,
    wind: f64,
    v1_vr_ratio: f64,
) -> Option<f64> {
    solve_chain(
        &ACCEL_GO_FLAPS_UP_ABOVE_10K_PA,
        &[oat, pa, weight, slope, wind, v1_vr_ratio],
    )
}

/// Landing distance in feet over an obstacle, no reverse thrust, flaps
/// down, dry runway.
///
/// Inputs: OAT in °C, pressure altitude in feet, landing weight in pounds,
/// runway slope in percent, wind component in knots, obstacle height in
/// feet.
pub fn landing_no_rev_flaps_down_dry(
    oat: f64,
    pa: f64,
    weight: f64,
    slope: f64,
    wind: f64,
    obstacle_height: f64,
) -> Option<f64> {
    solve_chain(
        &LANDING_NO_REV_FLAPS_DOWN_DRY,
        &[oat, pa, weight, slope, wind, obstacle_height],
    )
}

/// Landing distance in feet, no reverse thrust, flaps down, wet runway.
/// Inputs as [`landing_no_rev_flaps_down_dry`].
pub fn landing_no_rev_flaps_down_wet(
    oat: f64,
    pa: f64,
    weight: f64,
    slope: f64,
    wind: f64,
    obstacle_height: f64,
) -> Option<f64> {
    solve_chain(
        &LANDING_NO_REV_FLAPS_DOWN_WET,
        &[oat, pa, weight, slope, wind, obstacle_height],
    )
}

/// Landing distance in feet, reverse thrust, flaps down, dry runway.
/// Inputs as [`landing_no_rev_flaps_down_dry`].
pub fn landing_with_rev_flaps_down_dry(
    oat: f64,
    pa: f64,
    weight: f64,
    slope: f64,
    wind: f64,
    obstacle_height: f64,
) -> Option<f64> {
    solve_chain(
        &LANDING_WITH_REV_FLAPS_DOWN_DRY,
        &[oat, pa, weight, slope, wind, obstacle_height],
    )
}

/// Landing distance in feet, reverse thrust, flaps down, wet runway.
/// Inputs as [`landing_no_rev_flaps_down_dry`].
pub fn landing_with_rev_flaps_down_wet(
    oat: f64,
    pa: f64,
    weight: f64,
    slope: f64,
    wind: f64,
    obstacle_height: f64,
) -> Option<f64> {
    solve_chain(
        &LANDING_WITH_REV_FLAPS_DOWN_WET,
        &[oat, pa, weight, slope, wind, obstacle_height],
    )
}

/// One-engine-inoperative climb rate in feet per minute.
///
/// Inputs: OAT in °C, pressure altitude in feet, weight in pounds.
pub fn climb_one_engine_inop(oat: f64, pa: f64, weight: f64) -> Option<f64> {
    solve_chain(&CLIMB_ONE_ENGINE_INOP, &[oat, pa, weight])
}

/// Flaps-up landing distance derived from the flaps-down result, no reverse
/// thrust, dry runway. Piecewise linear correction from the published
/// conversion table.
pub fn landing_no_rev_flaps_up_dry(flaps_down_distance: f64) -> f64 {
    if flaps_down_distance < 3800.0 {
        1.4 * flaps_down_distance + 80.0
    } else {
        1.074074 * flaps_down_distance + 1318.5185
    }
}

/// Flaps-up landing distance, no reverse thrust, wet runway.
pub fn landing_no_rev_flaps_up_wet(flaps_down_distance: f64) -> f64 {
    if flaps_down_distance < 5500.0 {
        1.567567 * flaps_down_distance + 21.6216
    } else {
        1.17105 * flaps_down_distance - 2159.21
    }
}

/// Flaps-up landing distance, reverse thrust, dry runway.
pub fn landing_with_rev_flaps_up_dry(flaps_down_distance: f64) -> f64 {
    if flaps_down_distance < 2250.0 {
        1.25926 * flaps_down_distance + 216.6667
    } else {
        1.0218 * flaps_down_distance + 752.13
    }
}

/// Flaps-up landing distance, reverse thrust, wet runway.
pub fn landing_with_rev_flaps_up_wet(flaps_down_distance: f64) -> f64 {
    if flaps_down_distance < 4000.0 {
        1.42308 * flaps_down_distance + 7.6923
    } else {
        1.054545 * flaps_down_distance + 1481.818
    }
}

/// Landing flap configurations with digitized charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LandingFlaps {
    Up,
    Down,
}

/// Calculation settings selecting the applicable chart chain.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    pub wet_runway: bool,
    pub landing_reverse: bool,
    pub landing_flaps: LandingFlaps,
    /// When false, the wind input is ignored and the charts are read at
    /// zero wind.
    pub use_wind: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wet_runway: false,
            landing_reverse: false,
            landing_flaps: LandingFlaps::Down,
            use_wind: true,
        }
    }
}

fn effective_wind(settings: &Settings, wind: f64) -> f64 {
    if settings.use_wind {
        wind
    } else {
        0.0
    }
}

/// Accelerate-stop distance for the given settings (flaps-up charts).
pub fn accel_stop_distance(
    settings: &Settings,
    oat: f64,
    pa: f64,
    weight: f64,
    slope: f64,
    wind: f64,
    v1_vr_ratio: f64,
) -> Option<f64> {
    let wind = effective_wind(settings, wind);
    if settings.wet_runway {
        accel_stop_flaps_up_wet(oat, pa, weight, slope, wind, v1_vr_ratio)
    } else {
        accel_stop_flaps_up_dry(oat, pa, weight, slope, wind, v1_vr_ratio)
    }
}

/// Accelerate-go distance for the given settings; the pressure altitude
/// selects the applicable chart band.
pub fn accel_go_distance(
    settings: &Settings,
    oat: f64,
    pa: f64,
    weight: f64,
    slope: f64,
    wind: f64,
    v1_vr_ratio: f64,
) -> Option<f64> {
    let wind = effective_wind(settings, wind);
    if pa > 10000.0 {
        accel_go_flaps_up_above_10k_pa(oat, pa, weight, slope, wind, v1_vr_ratio)
    } else {
        accel_go_flaps_up_below_10k_pa(oat, pa, weight, slope, wind, v1_vr_ratio)
    }
}

/// Landing distance for the given settings. A flaps-up landing is derived
/// from the flaps-down chain through the matching conversion factor.
pub fn landing_distance(
    settings: &Settings,
    oat: f64,
    pa: f64,
    weight: f64,
    slope: f64,
    wind: f64,
    obstacle_height: f64,
) -> Option<f64> {
    let wind = effective_wind(settings, wind);
    let flaps_down = if settings.landing_reverse {
        if settings.wet_runway {
            landing_with_rev_flaps_down_wet(oat, pa, weight, slope, wind, obstacle_height)
        } else {
            landing_with_rev_flaps_down_dry(oat, pa, weight, slope, wind, obstacle_height)
        }
    } else if settings.wet_runway {
        landing_no_rev_flaps_down_wet(oat, pa, weight, slope, wind, obstacle_height)
    } else {
        landing_no_rev_flaps_down_dry(oat, pa, weight, slope, wind, obstacle_height)
    }?;

    match settings.landing_flaps {
        LandingFlaps::Down => Some(flaps_down),
        LandingFlaps::Up => Some(match (settings.landing_reverse, settings.wet_runway) {
            (false, false) => landing_no_rev_flaps_up_dry(flaps_down),
            (false, true) => landing_no_rev_flaps_up_wet(flaps_down),
            (true, false) => landing_with_rev_flaps_up_dry(flaps_down),
            (true, true) => landing_with_rev_flaps_up_wet(flaps_down),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Expected values below were read back from the digitized tables with
    // the same bracketing interpolation applied step by step.

    #[test]
    fn accel_stop_dry_mid_envelope() {
        let d = accel_stop_flaps_up_dry(15.0, 2000.0, 11000.0, 0.0, 10.0, 0.95).unwrap();
        assert!((d - 3874.875621890547).abs() < 1e-6);

        let d = accel_stop_flaps_up_dry(20.0, 4000.0, 12000.0, -1.0, 5.0, 0.9).unwrap();
        assert!((d - 4164.422916666666).abs() < 1e-6);
    }

    #[test]
    fn accel_stop_wet_mid_envelope() {
        let d = accel_stop_flaps_up_wet(10.0, 3000.0, 11500.0, 0.0, 8.0, 0.9).unwrap();
        assert!((d - 4995.9410933865065).abs() < 1e-6);
    }

    #[test]
    fn accel_stop_out_of_envelope_is_none() {
        assert!(accel_stop_flaps_up_dry(200.0, 200000.0, 99999.0, 0.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn accel_go_both_altitude_bands() {
        let d = accel_go_flaps_up_below_10k_pa(15.0, 2000.0, 11000.0, 0.0, 10.0, 0.95).unwrap();
        assert!((d - 4009.5652173913045).abs() < 1e-6);

        let d = accel_go_flaps_up_above_10k_pa(0.0, 12000.0, 11000.0, 0.0, 10.0, 0.95).unwrap();
        assert!((d - 7056.159420289855).abs() < 1e-6);
    }

    #[test]
    fn landing_flaps_down_variants() {
        let d = landing_no_rev_flaps_down_dry(15.0, 2000.0, 11000.0, 0.0, 10.0, 50.0).unwrap();
        assert!((d - 2883.3333333333335).abs() < 1e-6);

        let d = landing_no_rev_flaps_down_wet(15.0, 2000.0, 11000.0, 0.0, 10.0, 50.0).unwrap();
        assert!((d - 4054.761904761905).abs() < 1e-6);

        let d = landing_with_rev_flaps_down_dry(15.0, 2000.0, 11000.0, 0.0, 10.0, 50.0).unwrap();
        assert!((d - 2100.0).abs() < 1e-6);

        let d = landing_with_rev_flaps_down_wet(15.0, 2000.0, 11000.0, 0.0, 10.0, 50.0).unwrap();
        assert!((d - 3080.952380952381).abs() < 1e-6);
    }

    #[test]
    fn climb_two_step_chain() {
        let rate = climb_one_engine_inop(15.0, 5000.0, 11000.0).unwrap();
        assert!((rate - 768.2207792207793).abs() < 1e-6);

        let rate = climb_one_engine_inop(0.0, 10000.0, 12000.0).unwrap();
        assert!((rate - 502.85714285714283).abs() < 1e-6);
    }

    #[test]
    fn flaps_up_factors_are_continuous_at_breakpoints() {
        // Below, at and above each breakpoint.
        assert!((landing_no_rev_flaps_up_dry(3000.0) - 4280.0).abs() < 1e-6);
        let at = landing_no_rev_flaps_up_dry(3800.0);
        assert!((at - (1.074074 * 3800.0 + 1318.5185)).abs() < 1e-6);
        assert!((landing_no_rev_flaps_up_dry(5000.0) - 6688.8885).abs() < 1e-6);

        let d = landing_with_rev_flaps_up_dry(2000.0);
        assert!((d - (1.25926 * 2000.0 + 216.6667)).abs() < 1e-6);
        let d = landing_no_rev_flaps_up_wet(5000.0);
        assert!((d - (1.567567 * 5000.0 + 21.6216)).abs() < 1e-6);
        let d = landing_with_rev_flaps_up_wet(4500.0);
        assert!((d - (1.054545 * 4500.0 + 1481.818)).abs() < 1e-6);
    }

    #[test]
    fn settings_dispatch_selects_charts() {
        let dry = Settings::default();
        let wet = Settings { wet_runway: true, ..Settings::default() };

        let d = accel_stop_distance(&dry, 15.0, 2000.0, 11000.0, 0.0, 10.0, 0.95).unwrap();
        assert!((d - 3874.875621890547).abs() < 1e-6);

        let d = accel_stop_distance(&wet, 10.0, 3000.0, 11500.0, 0.0, 8.0, 0.9).unwrap();
        assert!((d - 4995.9410933865065).abs() < 1e-6);

        let d = accel_go_distance(&dry, 0.0, 12000.0, 11000.0, 0.0, 10.0, 0.95).unwrap();
        assert!((d - 7056.159420289855).abs() < 1e-6);
    }

    #[test]
    fn landing_dispatch_composes_flaps_up_factor() {
        let flaps_up = Settings {
            landing_flaps: LandingFlaps::Up,
            ..Settings::default()
        };
        let flaps_down =
            landing_no_rev_flaps_down_dry(15.0, 2000.0, 11000.0, 0.0, 10.0, 50.0).unwrap();
        let composed =
            landing_distance(&flaps_up, 15.0, 2000.0, 11000.0, 0.0, 10.0, 50.0).unwrap();
        assert!((composed - landing_no_rev_flaps_up_dry(flaps_down)).abs() < 1e-9);
    }

    #[test]
    fn disabled_wind_reads_charts_at_zero_wind() {
        let no_wind = Settings { use_wind: false, ..Settings::default() };
        let with = accel_stop_distance(&no_wind, 15.0, 2000.0, 11000.0, 0.0, 25.0, 0.95);
        let zero = accel_stop_distance(&Settings::default(), 15.0, 2000.0, 11000.0, 0.0, 0.0, 0.95);
        assert_eq!(with, zero);
    }

    #[test]
    fn chains_have_expected_shape() {
        for chain in [
            &*ACCEL_STOP_FLAPS_UP_DRY,
            &*ACCEL_STOP_FLAPS_UP_WET,
            &*ACCEL_GO_FLAPS_UP_BELOW_10K_PA,
            &*ACCEL_GO_FLAPS_UP_ABOVE_10K_PA,
            &*LANDING_NO_REV_FLAPS_DOWN_DRY,
            &*LANDING_NO_REV_FLAPS_DOWN_WET,
            &*LANDING_WITH_REV_FLAPS_DOWN_DRY,
            &*LANDING_WITH_REV_FLAPS_DOWN_WET,
        ] {
            assert_eq!(chain.len(), 5);
            for chart in chain {
                assert!(chart.points.len() >= 3);
            }
        }
        assert_eq!(CLIMB_ONE_ENGINE_INOP.len(), 2);
    }
}
