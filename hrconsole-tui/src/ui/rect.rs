/// A screen region in terminal cells.
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

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    /// The single line at `offset` rows from the top, if inside.
    pub fn row(&self, offset: u16) -> Option<Rect> {
        (offset < self.height).then(|| Rect::new(self.x, self.y + offset, self.width, 1))
    }

    /// Split off `rows` lines from the top. Returns (top, rest).
    pub fn split_top(self, rows: u16) -> (Rect, Rect) {
        let rows = rows.min(self.height);
        (
            Rect::new(self.x, self.y, self.width, rows),
            Rect::new(self.x, self.y + rows, self.width, self.height - rows),
        )
    }

    /// Split off `rows` lines from the bottom. Returns (rest, bottom).
    pub fn split_bottom(self, rows: u16) -> (Rect, Rect) {
        let rows = rows.min(self.height);
        (
            Rect::new(self.x, self.y, self.width, self.height - rows),
            Rect::new(self.x, self.bottom() - rows, self.width, rows),
        )
    }

    /// A centered rectangle of at most `width` x `height`.
    pub fn centered(&self, width: u16, height: u16) -> Rect {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Rect::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }
}

