/// 選單顯示狀態，預設隱藏
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuVisibility {
    hidden: bool,
}

impl MenuVisibility {
    pub fn new() -> Self {
        Self { hidden: true }
    }

    pub fn toggle(&mut self) -> bool {
        self.hidden = !self.hidden;
        tracing::debug!("Menu is now {}", if self.hidden { "hidden" } else { "visible" });
        self.is_visible()
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

impl Default for MenuVisibility {
    fn default() -> Self {
        Self::new()
    }
}
