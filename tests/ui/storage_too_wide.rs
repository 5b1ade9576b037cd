use light_flagset::flag_enum;

flag_enum! {
    #[allow(dead_code)]
    enum Wide: u128 { Low, High }
}

fn main() {}
