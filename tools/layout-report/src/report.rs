use std::{fmt, mem};

use soa::{pair_vec::PushError, PairVec};

use crate::cli::Layout;

/// Memory used by the same pairs in a [PairVec] and in a `Vec<(A, B)>`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    name: &'static str,
    count: usize,
    first_size: usize,
    second_size: usize,
    interleaved_bytes: usize,
    columnar_bytes: usize,
}

impl Report {
    #[must_use]
    pub fn saved_bytes(&self) -> usize {
        self.interleaved_bytes.saturating_sub(self.columnar_bytes)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {} pairs of {} + {} bytes: interleaved {} bytes, columnar {} bytes, saved {} bytes",
            self.name,
            self.count,
            self.first_size,
            self.second_size,
            self.interleaved_bytes,
            self.columnar_bytes,
            self.saved_bytes()
        )
    }
}

/// Measure every layout that `layout` stands for
pub fn run(layout: Layout, count: usize) -> Result<Vec<Report>, PushError> {
    let report = match layout {
        Layout::U8U64 => measure("u8-u64", count, |i| (i as u8, i as u64))?,
        Layout::U16F64 => measure("u16-f64", count, |i| (i as u16, i as f64 * 0.5))?,
        Layout::U32U8 => measure("u32-u8", count, |i| (i as u32, (i % 256) as u8))?,
        Layout::F32F32 => measure("f32-f32", count, |i| (i as f32, -(i as f32)))?,
        Layout::All => {
            let mut reports = Vec::with_capacity(Layout::SINGLE.len());
            for single in Layout::SINGLE {
                reports.extend(run(single, count)?);
            }
            return Ok(reports);
        },
    };

    Ok(vec![report])
}

fn measure<A, B, F>(name: &'static str, count: usize, make_pair: F) -> Result<Report, PushError>
where
    A: PartialEq,
    B: PartialEq,
    F: Fn(usize) -> (A, B),
{
    let mut columnar = PairVec::new();
    let mut interleaved = Vec::new();

    for i in 0..count {
        columnar.try_push(make_pair(i))?;

        // Reserve first, so that running out of memory is reported instead of aborting
        interleaved.try_reserve(1)?;
        interleaved.push(make_pair(i));
    }

    let mismatches = interleaved
        .iter()
        .enumerate()
        .filter(|(index, (first, second))| columnar.get(*index) != Ok((first, second)))
        .count();
    if mismatches != 0 {
        log::warn!("{name}: {mismatches} elements differ between both containers");
    }

    log::debug!(
        "{name}: columnar capacity {}, interleaved capacity {}",
        columnar.capacity(),
        interleaved.capacity()
    );

    Ok(Report {
        name,
        count: columnar.len(),
        first_size: mem::size_of::<A>(),
        second_size: mem::size_of::<B>(),
        interleaved_bytes: interleaved.len() * mem::size_of::<(A, B)>(),
        columnar_bytes: columnar.len() * (mem::size_of::<A>() + mem::size_of::<B>()),
    })
}

#[cfg(test)]
mod tests {
    use super::{run, Layout};

    #[test]
    fn padding_is_saved() {
        let reports = run(Layout::U8U64, 10).expect("pushing ten pairs succeeds");

        assert_eq!(reports.len(), 1);
        let report = reports[0];

        assert_eq!(report.count, 10);
        assert_eq!(report.columnar_bytes, 10 * 9);
        assert_eq!(report.interleaved_bytes, 10 * std::mem::size_of::<(u8, u64)>());
        assert_eq!(report.saved_bytes(), report.interleaved_bytes - 90);
    }

    #[test]
    fn equal_halves_save_nothing() {
        let reports = run(Layout::F32F32, 4).expect("pushing four pairs succeeds");

        assert_eq!(reports[0].saved_bytes(), 0);
    }

    #[test]
    fn all_layouts() {
        let reports = run(Layout::All, 3).expect("pushing three pairs succeeds");

        assert_eq!(reports.len(), Layout::SINGLE.len());
        assert!(reports.iter().all(|report| report.count == 3));
    }

    #[test]
    fn empty() {
        let reports = run(Layout::U32U8, 0).expect("nothing to push");

        assert_eq!(reports[0].columnar_bytes, 0);
        assert_eq!(reports[0].interleaved_bytes, 0);
    }
}
