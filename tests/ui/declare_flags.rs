use light_flagset::{FlagSet, flag_enum};

flag_enum! {
    /// Flags declared outside of the defining crate.
    #[derive(Debug, PartialOrd, Ord)]
    pub enum Mode: i32 {
        Fast,
        /// Documented member.
        Safe,
        Verbose = 2,
    }
    const NONE = 0;
    impl ops;
}

flag_enum! {
    enum Layer: u64 {
        Ground = 0,
        Water = 8,
        Air = 40,
    }
    const ALL = (1 << 0) | (1 << 8) | (1 << 40);
}

fn main() {
    let modes = Mode::Fast | Mode::Verbose;
    let raw: u32 = modes.raw_value();
    assert_eq!(raw, 0b101);
    assert_eq!(FlagSet::<Mode>::from_raw(raw), modes);
    assert!(Mode::Fast < Mode::Safe);

    let layers = FlagSet::new(Layer::Air) | Layer::Ground;
    assert_eq!(layers.raw_value(), (1 << 40) | 1);
    assert_eq!((!layers).raw_value(), 1 << 8);
    assert_eq!(layers.max_len(), 3);
}
