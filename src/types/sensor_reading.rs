/// 单个传感器读数，由设备端以JSON发布
#[derive(serde::Deserialize, Clone, Copy, Debug)]
pub struct SensorReading {
    pub value: f32,
    pub timestamp: i64,
}

/// 读数来源的传感器类型
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorKind {
    Pressure,
    Temperature,
}

impl SensorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Pressure => "pressure",
            SensorKind::Temperature => "temperature",
        }
    }
}

/// 传感器线程发往GUI的一条更新
#[derive(Clone, Copy, Debug)]
pub struct SensorUpdate {
    pub kind: SensorKind,
    pub reading: SensorReading,
}

impl SensorUpdate {
    pub fn new(kind: SensorKind, reading: SensorReading) -> Self {
        Self { kind, reading }
    }
}
