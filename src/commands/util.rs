pub(crate) fn min_max<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<(f64, f64)> {
    let mut iter = values.into_iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    }))
}

pub(crate) fn clamp_index(index: i64, extent: usize) -> usize {
    index.clamp(0, extent as i64 - 1) as usize
}
