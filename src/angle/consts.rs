pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '\'';
pub(crate) const ARC_SECOND_SIGN: char = '"';

pub(crate) const HALF_TURN_DEG: u16 = 180;
pub(crate) const QUARTER_TURN_DEG: u16 = HALF_TURN_DEG >> 1;

pub(crate) const SECONDS_IN_DEGREE: f64 = (MINUTES_IN_DEGREE as f64) * (SECONDS_IN_MINUTE as f64);
