macro_rules! impl_complement {
    ($($int:ty),* $(,)?) => {
        $(
            impl $crate::search::Complement for $int {
                fn complement(self, target: Self) -> Option<Self> {
                    target.checked_sub(self)
                }
            }
        )*
    };
}
