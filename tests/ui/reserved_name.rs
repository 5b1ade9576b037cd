use light_flagset::flag_enum;

flag_enum! {
    #[allow(dead_code)]
    enum Reserved: u8 { Read, Write, All }
}

fn main() {}
