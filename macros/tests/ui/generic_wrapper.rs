use tyset::{are_unique, TypeDescriptor, TypeList};

#[derive(TypeDescriptor)]
struct Wrapper<'a, T: ?Sized> {
    inner: &'a T,
}

#[derive(TypeDescriptor)]
#[descriptor(key = "generic_wrapper::Tagged")]
struct Tagged<T, U>(T, U);

const _: () = assert!(are_unique::<TypeList![Wrapper<'static, i32>, Wrapper<'static, u8>]>());
const _: () = assert!(!are_unique::<TypeList![Wrapper<'static, str>, Wrapper<'static, str>]>());
const _: () = assert!(are_unique::<TypeList![Tagged<i32, u8>, Tagged<u8, i32>]>());

fn main() {
    let value = 7;
    let wrapper = Wrapper { inner: &value };
    let tagged = Tagged(*wrapper.inner, 1u8);
    assert_eq!(tagged.0 + i32::from(tagged.1), 8);
}
