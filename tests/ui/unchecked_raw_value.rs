use light_flagset::{FlagEnum, FlagSet};

#[derive(Clone, Copy, PartialEq, Eq)]
struct Wire(u8);

impl FlagEnum for Wire {
    type Bits = u8;
    const COUNT: usize = 100;

    fn bit_index(self) -> u32 {
        self.0 as u32
    }

    fn from_bit_index(index: u32) -> Option<Self> {
        (index < 8).then_some(Wire(index as u8))
    }
}

fn main() {
    let wires = FlagSet::<Wire>::from_raw(0);
    assert_eq!(wires.max_len(), 100);
}
