use light_flagset::{FlagSet, flag_enum};
use std::fmt::{self, Display, Formatter};

flag_enum! {
    #[derive(Debug)]
    enum Permission: u8 {
        Read,
        Write,
        Execute,
    }
    impl ops;
}

impl Display for Permission {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Permission::Read => "Read",
            Permission::Write => "Write",
            Permission::Execute => "Execute",
        };
        f.write_str(name)
    }
}

fn describe(name: &str, perms: FlagSet<Permission>) {
    println!(
        "{name}: {perms} (raw {:#05b}, {} of {})",
        perms.raw_value(),
        perms.len(),
        perms.max_len()
    );
}

fn main() {
    let owner = FlagSet::<Permission>::all();
    let group = Permission::Read | Permission::Execute;
    let other = FlagSet::new(Permission::Read);

    describe("owner", owner);
    describe("group", group);
    describe("other", other);
    describe("group without other", group - other);
    describe("missing for group", !group);

    // persisted as the raw value and loaded back
    let stored = group.raw_value();
    match FlagSet::<Permission>::try_from_raw(stored) {
        Some(loaded) => assert_eq!(loaded, group),
        None => unreachable!("stored value {stored:#b} is in domain"),
    }

    if owner.all_of(group) {
        println!("owner covers every group permission");
    }
    if let Some(highest) = group.last() {
        println!("highest group permission: {highest}");
    }
}
