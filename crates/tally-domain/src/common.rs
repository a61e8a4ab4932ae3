//! Shared traits for records and views.

use rust_decimal::Decimal;

/// Exposes the opaque identifier assigned by the transaction store.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Supplies a common contract for retrieving exact monetary amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Sums the amounts of any collection of [`Amounted`] items.
pub fn sum_amounts<'a, T, I>(items: I) -> Decimal
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .fold(Decimal::ZERO, |acc, item| acc + item.amount())
}
