use light_flagset::{FlagSet, flag_enum};
use std::fmt::{self, Display, Formatter};

flag_enum! {
    enum Topping: u16 {
        Cheese,
        Ham,
        Olives,
        Onions,
    }
}

impl Display for Topping {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topping::Cheese => "cheese",
            Topping::Ham => "ham",
            Topping::Olives => "olives",
            Topping::Onions => "onions",
        };
        f.write_str(name)
    }
}

fn combinations(toppings: &[Topping], picked: &mut FlagSet<Topping>) {
    let Some((&topping, rest)) = toppings.split_first() else {
        println!("{picked}");
        return;
    };
    picked.set(topping);
    combinations(rest, picked);
    picked.unset(topping);
    combinations(rest, picked)
}

fn main() {
    let toppings: Vec<Topping> = FlagSet::<Topping>::all().iter().collect();
    let mut picked = FlagSet::none();
    combinations(&toppings, &mut picked);
}
