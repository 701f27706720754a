/// 手势日志：只追加，最新条目在最前
#[derive(Debug, Default)]
pub struct GestureLog {
    entries: Vec<String>,
}

impl GestureLog {
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.insert(0, entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
