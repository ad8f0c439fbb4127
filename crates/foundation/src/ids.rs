/// Opaque identity of a surveyed body.
///
/// The render core never interprets this value; it only compares it to
/// detect that a view was retargeted at a different body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(u64);

impl BodyId {
    pub const fn new(n: u64) -> Self {
        BodyId(n)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}
