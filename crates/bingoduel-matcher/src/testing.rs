use bingoduel_core::{Card, CellValue, MarkedCells};
use proptest::prelude::*;

/// Card holding 1..=25 in row-major order.
pub(crate) fn identity_card() -> Card {
    let rows: Vec<Vec<u32>> = (0..5).map(|r| (1..=5).map(|c| r * 5 + c).collect()).collect();
    Card::from_rows(&rows).unwrap()
}

pub(crate) fn v(n: u32) -> CellValue {
    CellValue::new(n).unwrap()
}

pub(crate) fn marks<I>(values: I) -> MarkedCells
where
    I: IntoIterator<Item = u32>,
{
    values.into_iter().map(v).collect()
}

/// Cards of 25 distinct values drawn from 1..=75 in random order.
pub(crate) fn unique_card() -> impl Strategy<Value = Card> {
    proptest::sample::subsequence((1..=75).collect::<Vec<u32>>(), 25)
        .prop_shuffle()
        .prop_map(|values| {
            let rows: Vec<&[u32]> = values.chunks(5).collect();
            Card::from_rows(&rows).unwrap()
        })
}
