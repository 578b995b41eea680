pub mod plot;
pub mod gyro_vis2d;
