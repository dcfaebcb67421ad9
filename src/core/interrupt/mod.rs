pub struct InterruptLatch {
    pending: bool,
    kind: u8,
    payload: u8,
}

impl InterruptLatch {
    pub fn new() -> Self {
        Self {
            pending: false,
            kind: 0,
            payload: 0,
        }
    }

    pub fn try_raise(&mut self, kind: u8, payload: u8) -> bool {
        if self.pending {
            return false;
        }
        self.kind = kind;
        self.payload = payload;
        self.pending = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn take(&mut self) -> (u8, u8) {
        self.pending = false;
        (self.kind, self.payload)
    }
}

impl Default for InterruptLatch {
    fn default() -> Self {
        Self::new()
    }
}
