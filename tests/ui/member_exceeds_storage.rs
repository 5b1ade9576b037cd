use light_flagset::flag_enum;

flag_enum! {
    #[allow(dead_code)]
    enum Overflow: u8 { Low = 0, High = 9 }
}

fn main() {}
