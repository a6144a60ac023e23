#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by a margin on the left/right and top/bottom.
    pub fn inset(&self, horizontal: u16, vertical: u16) -> Self {
        let width = self.width.saturating_sub(horizontal * 2);
        let height = self.height.saturating_sub(vertical * 2);
        Self::new(self.x + horizontal, self.y + vertical, width, height)
    }

    /// Single row at offset `dy`, or an empty rect past the bottom.
    pub fn row(&self, dy: u16) -> Self {
        if dy >= self.height {
            return Self::new(self.x, self.bottom(), self.width, 0);
        }
        Self::new(self.x, self.y + dy, self.width, 1)
    }

    /// Split off `height` rows from the top. Returns `(top, rest)`.
    pub fn split_top(&self, height: u16) -> (Self, Self) {
        let height = height.min(self.height);
        (
            Self::new(self.x, self.y, self.width, height),
            Self::new(self.x, self.y + height, self.width, self.height - height),
        )
    }

    /// Split off `height` rows from the bottom. Returns `(rest, bottom)`.
    pub fn split_bottom(&self, height: u16) -> (Self, Self) {
        let height = height.min(self.height);
        let rest = self.height - height;
        (
            Self::new(self.x, self.y, self.width, rest),
            Self::new(self.x, self.y + rest, self.width, height),
        )
    }
}
