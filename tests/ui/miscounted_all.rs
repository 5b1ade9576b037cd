use light_flagset::flag_enum;

flag_enum! {
    #[allow(dead_code)]
    enum Miscounted: u8 { Low = 0, High = 2 }
    const ALL = 0b111;
}

fn main() {}
