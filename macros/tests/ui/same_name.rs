use tyset::{are_unique, contains, TypeDescriptor, TypeList};

mod a {
    #[derive(super::TypeDescriptor)]
    pub struct Id(pub u8);
}

mod b {
    #[derive(super::TypeDescriptor)]
    pub struct Id(pub &'static str);
}

const _: () = assert!(are_unique::<TypeList![a::Id, b::Id]>());
const _: () = assert!(!contains::<b::Id, TypeList![a::Id]>());

fn main() {
    let _ = (a::Id(1).0, b::Id("x").0);
}
