use light_flagset::{FlagEnum, FlagSet};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Channel {
    Left,
    Right,
}

impl FlagEnum for Channel {
    type Bits = u8;
    const COUNT: usize = 2;

    fn bit_index(self) -> u32 {
        self as u32
    }

    fn from_bit_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Channel::Left),
            1 => Some(Channel::Right),
            _ => None,
        }
    }
}

fn main() {
    let stereo = FlagSet::<Channel>::all();
    assert_eq!(stereo.raw_value(), 0b11);
    assert_eq!(stereo.back(), Channel::Right);
    assert_eq!((stereo - Channel::Left).front(), Channel::Right);
}
