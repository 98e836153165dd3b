/// Fired / hit / miss counters and their on-screen position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub x: i32,
    pub y: i32,
    pub fired: usize,
    pub hit: usize,
    pub miss: usize,
}

impl Stats {
    pub fn new(x: i32, y: i32) -> Self {
        Stats {
            x,
            y,
            ..Stats::default()
        }
    }

    pub fn update(&mut self, fired: usize, hit: usize, miss: usize) {
        self.fired = fired;
        self.hit = hit;
        self.miss = miss;
    }

    pub fn reset(&mut self) {
        self.update(0, 0, 0);
    }

    pub fn text(&self) -> String {
        format!("Fired: {}  Hit: {}  Miss: {}", self.fired, self.hit, self.miss)
    }
}
