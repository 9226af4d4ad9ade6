/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Sums the amounts of any iterator of amounted items.
///
/// Amounts are added in ascending order so that any permutation of the input
/// yields a bit-identical total.
pub fn total_amount<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut amounts: Vec<f64> = items.into_iter().map(Amounted::amount).collect();
    amounts.sort_by(f64::total_cmp);
    amounts.into_iter().fold(0.0, |acc, amount| acc + amount)
}
