//! A date of any supported calendar, chosen at runtime.

use crate::date::CalendarDate;
use crate::fields::{DateFields, DateTags};
use crate::gregorian::GregorianDate;
use crate::hebrew::HebrewDate;
use crate::islamic::IslamicDate;
use crate::julian::JulianDate;
use crate::kind::CalendarKind;
use crate::ordinal::RataDie;

/// Runtime-selected calendar date, as returned by [`CalendarKind::new_date`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnyDate {
    Gregorian(GregorianDate),
    Julian(JulianDate),
    Hebrew(HebrewDate),
    Islamic(IslamicDate),
}

macro_rules! each {
    ($self:expr, $d:ident => $body:expr) => {
        match $self {
            AnyDate::Gregorian($d) => $body,
            AnyDate::Julian($d) => $body,
            AnyDate::Hebrew($d) => $body,
            AnyDate::Islamic($d) => $body,
        }
    };
}

impl AnyDate {
    /// The same instant expressed in `target`'s calendar. Tags are kept.
    pub fn convert(&self, target: CalendarKind) -> AnyDate {
        let rd = self.kind().rebase(self.rata_die(), target);
        let tags = self.tags().clone();
        match target {
            CalendarKind::Gregorian => GregorianDate::from_rata_die(rd).with_tags(tags).into(),
            CalendarKind::Julian => JulianDate::from_rata_die(rd).with_tags(tags).into(),
            CalendarKind::Hebrew => HebrewDate::from_rata_die(rd).with_tags(tags).into(),
            CalendarKind::Islamic => IslamicDate::from_rata_die(rd).with_tags(tags).into(),
        }
    }

    /// Attaches time zone and locale tags.
    pub fn with_tags(self, tags: DateTags) -> Self {
        match self {
            AnyDate::Gregorian(d) => AnyDate::Gregorian(d.with_tags(tags)),
            AnyDate::Julian(d) => AnyDate::Julian(d.with_tags(tags)),
            AnyDate::Hebrew(d) => AnyDate::Hebrew(d.with_tags(tags)),
            AnyDate::Islamic(d) => AnyDate::Islamic(d.with_tags(tags)),
        }
    }

    /// Name of this date's month.
    pub fn month_name(&self) -> Option<&'static str> {
        self.kind().month_name(self.month(), self.year())
    }
}

impl CalendarDate for AnyDate {
    fn kind(&self) -> CalendarKind {
        each!(self, d => d.kind())
    }

    fn rata_die(&self) -> RataDie {
        each!(self, d => d.rata_die())
    }

    fn fields(&self) -> DateFields {
        each!(self, d => d.fields())
    }

    fn tags(&self) -> &DateTags {
        each!(self, d => d.tags())
    }

    fn with_rata_die(&self, rd: RataDie) -> Self {
        match self {
            AnyDate::Gregorian(d) => AnyDate::Gregorian(d.with_rata_die(rd)),
            AnyDate::Julian(d) => AnyDate::Julian(d.with_rata_die(rd)),
            AnyDate::Hebrew(d) => AnyDate::Hebrew(d.with_rata_die(rd)),
            AnyDate::Islamic(d) => AnyDate::Islamic(d.with_rata_die(rd)),
        }
    }
}

impl From<GregorianDate> for AnyDate {
    fn from(date: GregorianDate) -> Self {
        AnyDate::Gregorian(date)
    }
}

impl From<JulianDate> for AnyDate {
    fn from(date: JulianDate) -> Self {
        AnyDate::Julian(date)
    }
}

impl From<HebrewDate> for AnyDate {
    fn from(date: HebrewDate) -> Self {
        AnyDate::Hebrew(date)
    }
}

impl From<IslamicDate> for AnyDate {
    fn from(date: IslamicDate) -> Self {
        AnyDate::Islamic(date)
    }
}
