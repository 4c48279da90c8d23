use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{Result, ShapeError};
use crate::geometry::Rectangle;
use crate::logging::{LogEvent, LogFields, LogLevel};

/// Identifies one of the five slots of a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Full,
    Preview,
    Piece,
    Stats,
    Set,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Full,
        Region::Preview,
        Region::Piece,
        Region::Stats,
        Region::Set,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Full => "full",
            Region::Preview => "preview",
            Region::Piece => "piece",
            Region::Stats => "stats",
            Region::Set => "set",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| ShapeError::UnknownRegion(s.to_string()))
    }
}

/// Screen layout produced by an external layout engine.
///
/// No relationship between the five rectangles is enforced; overlap or a
/// region spilling outside `full` is passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resolution {
    pub full: Rectangle,
    pub preview: Rectangle,
    pub piece: Rectangle,
    pub stats: Rectangle,
    pub set: Rectangle,
}

impl Resolution {
    pub const fn new(
        full: Rectangle,
        preview: Rectangle,
        piece: Rectangle,
        stats: Rectangle,
        set: Rectangle,
    ) -> Self {
        Self {
            full,
            preview,
            piece,
            stats,
            set,
        }
    }

    /// Build a resolution from `(region, rect)` pairs; each region must appear exactly once.
    pub fn from_regions<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Region, Rectangle)>,
    {
        let mut slots: [Option<Rectangle>; 5] = [None; 5];
        for (region, rect) in pairs {
            let slot = &mut slots[region.index()];
            if slot.is_some() {
                return Err(ShapeError::DuplicateRegion(region));
            }
            *slot = Some(rect);
        }

        let take = |region: Region| slots[region.index()].ok_or(ShapeError::MissingRegion(region));
        Ok(Self {
            full: take(Region::Full)?,
            preview: take(Region::Preview)?,
            piece: take(Region::Piece)?,
            stats: take(Region::Stats)?,
            set: take(Region::Set)?,
        })
    }

    pub fn get(&self, region: Region) -> Rectangle {
        match region {
            Region::Full => self.full,
            Region::Preview => self.preview,
            Region::Piece => self.piece,
            Region::Stats => self.stats,
            Region::Set => self.set,
        }
    }

    /// Iterate regions in [`Region::ALL`] order.
    pub fn regions(&self) -> impl Iterator<Item = (Region, Rectangle)> + '_ {
        Region::ALL
            .into_iter()
            .map(move |region| (region, self.get(region)))
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        for (region, rect) in self.regions() {
            map.insert(region.as_str().to_string(), Value::Object(rect.as_fields()));
        }
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        let mut fields = self.as_fields();
        fields.insert("regions".to_string(), json!(Region::ALL.len()));
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "resolution".to_string(),
            fields,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Resolution {
        Resolution::new(
            Rectangle::new(0.0, 0.0, 1920.0, 1080.0),
            Rectangle::new(1500.0, 40.0, 200.0, 200.0),
            Rectangle::new(660.0, 40.0, 600.0, 1000.0),
            Rectangle::new(40.0, 40.0, 400.0, 600.0),
            Rectangle::new(1500.0, 300.0, 200.0, 600.0),
        )
    }

    #[test]
    fn get_reads_matching_field() {
        let layout = sample();
        assert_eq!(layout.get(Region::Full), layout.full);
        assert_eq!(layout.get(Region::Preview), layout.preview);
        assert_eq!(layout.get(Region::Piece), layout.piece);
        assert_eq!(layout.get(Region::Stats), layout.stats);
        assert_eq!(layout.get(Region::Set), layout.set);
    }

    #[test]
    fn regions_follow_declaration_order() {
        let order: Vec<_> = sample().regions().map(|(region, _)| region).collect();
        assert_eq!(order, Region::ALL.to_vec());
    }

    #[test]
    fn region_names_parse_back() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>().unwrap(), region);
            assert_eq!(region.to_string(), region.as_str());
        }
    }

    #[test]
    fn unknown_region_name_is_rejected() {
        let err = "Preview".parse::<Region>().unwrap_err();
        assert!(matches!(err, ShapeError::UnknownRegion(name) if name == "Preview"));
    }

    #[test]
    fn from_regions_accepts_any_order() {
        let layout = sample();
        let mut pairs: Vec<_> = layout.regions().collect();
        pairs.reverse();
        assert_eq!(Resolution::from_regions(pairs).unwrap(), layout);
    }

    #[test]
    fn from_regions_reports_each_missing_region() {
        let layout = sample();
        for missing in Region::ALL {
            let pairs = layout.regions().filter(|(region, _)| *region != missing);
            let err = Resolution::from_regions(pairs).unwrap_err();
            assert!(matches!(err, ShapeError::MissingRegion(region) if region == missing));
        }
    }

    #[test]
    fn from_regions_rejects_duplicates() {
        let layout = sample();
        let pairs = layout
            .regions()
            .chain(std::iter::once((Region::Stats, Rectangle::default())));
        let err = Resolution::from_regions(pairs).unwrap_err();
        assert!(matches!(err, ShapeError::DuplicateRegion(Region::Stats)));
    }

    #[test]
    fn overlapping_regions_pass_through() {
        let everywhere = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let outside = Rectangle::new(50.0, 50.0, 10.0, 10.0);
        let layout = Resolution::new(everywhere, everywhere, everywhere, outside, outside);
        assert_eq!(layout.stats, outside);
        assert_eq!(layout.piece, layout.full);
    }

    #[test]
    fn log_event_nests_each_region() {
        let event = sample().to_log_event("layout");
        assert_eq!(event.target, "layout");
        assert_eq!(event.message, "resolution");
        assert_eq!(event.fields["regions"], json!(5));
        assert_eq!(event.fields["full"]["width"], json!(1920.0));
        assert_eq!(event.fields["set"]["top"], json!(300.0));
    }
}
