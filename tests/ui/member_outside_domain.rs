use light_flagset::flag_enum;

flag_enum! {
    #[allow(dead_code)]
    enum Gap: u8 { Low = 0, High = 5 }
}

fn main() {}
