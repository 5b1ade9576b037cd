use light_flagset::flag_enum;

flag_enum! {
    enum Closed: u8 { Read, Write }
}

fn main() {
    let _ = Closed::Read | Closed::Write;
}
