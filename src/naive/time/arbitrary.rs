#![cfg_attr(docsrs, doc(cfg(feature = "arbitrary")))]

use super::{NaiveTime, SECS_PER_DAY};
use arbitrary::{Arbitrary, Unstructured};

impl Arbitrary<'_> for NaiveTime {
    fn arbitrary(u: &mut Unstructured) -> arbitrary::Result<NaiveTime> {
        let secs = u.int_in_range(0..=SECS_PER_DAY - 1)?;
        NaiveTime::from_num_seconds_from_midnight_opt(secs).ok_or(arbitrary::Error::IncorrectFormat)
    }
}
