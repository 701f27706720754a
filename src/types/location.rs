/// 一次定位结果（纬度/经度），等待反向地理编码
#[derive(serde::Deserialize, Clone, Copy, Debug)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: i64,
}
