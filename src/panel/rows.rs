use crate::panel::index::BlendShapeIndex;
use crate::panel::router::BlendShapeRouter;
use crate::scene::BlendShapeTarget;
use crate::settings::PanelSettings;

/// Clamps a slider weight into `[0.0, 1.0]`; NaN becomes `0.0`.
#[inline]
#[must_use]
pub fn clamp_weight(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// One row of the blend-shape panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationRow {
    /// Group header, named after a blend-shape root.
    Group { name: String },
    /// Slider for one channel of `group`.
    Slider { name: String, group: String, value: f32 },
}

impl PresentationRow {
    #[must_use]
    pub fn group(name: impl Into<String>) -> Self {
        Self::Group { name: name.into() }
    }

    /// Creates a slider row; `value` is clamped.
    #[must_use]
    pub fn slider(name: impl Into<String>, group: impl Into<String>, value: f32) -> Self {
        Self::Slider {
            name: name.into(),
            group: group.into(),
            value: clamp_weight(value),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Group { name } | Self::Slider { name, .. } => name,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Owning group of a slider row.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        match self {
            Self::Group { .. } => None,
            Self::Slider { group, .. } => Some(group),
        }
    }

    /// Current weight of a slider row.
    #[must_use]
    pub fn value(&self) -> Option<f32> {
        match self {
            Self::Group { .. } => None,
            Self::Slider { value, .. } => Some(*value),
        }
    }
}

/// A slider movement, resolved to the names the router needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderEvent {
    pub group: String,
    pub leaf: String,
    pub value: f32,
}

impl SliderEvent {
    /// Hands the event to [`BlendShapeRouter`].
    pub fn dispatch<T>(&self, target: &mut T)
    where
        T: BlendShapeTarget + ?Sized,
    {
        BlendShapeRouter::apply(target, &self.group, &self.leaf, self.value);
    }
}

/// Row data source for a tabular blend-shape panel.
///
/// Each group header is immediately followed by its sliders, sorted by name.
/// The sequence is rebuilt wholesale from a [`BlendShapeIndex`]; the only
/// in-place mutation is a slider's value.
#[derive(Debug, Clone, Default)]
pub struct RowModel {
    rows: Vec<PresentationRow>,
    settings: PanelSettings,
}

impl RowModel {
    #[must_use]
    pub fn new(settings: PanelSettings) -> Self {
        Self {
            rows: Vec::new(),
            settings,
        }
    }

    /// Builds the row sequence for `index`.
    ///
    /// Groups follow root declaration order. A root with no channels still
    /// gets its header. All sliders start at `0.0`.
    #[must_use]
    pub fn build_rows(index: &BlendShapeIndex) -> Vec<PresentationRow> {
        let mut rows = Vec::with_capacity(index.len() + index.channel_count());

        for (key, paths) in index.iter() {
            let group = key.name();
            rows.push(PresentationRow::group(group));

            let mut names: Vec<&str> = paths.keys().map(String::as_str).collect();
            names.sort_unstable();
            rows.extend(names.into_iter().map(|name| PresentationRow::slider(name, group, 0.0)));
        }

        rows
    }

    /// Replaces every row with a fresh build from `index`.
    pub fn rebuild(&mut self, index: &BlendShapeIndex) {
        self.rows = Self::build_rows(index);
    }

    /// Drops all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[PresentationRow] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `false` for sliders and out-of-range indices.
    #[must_use]
    pub fn is_group_row(&self, index: usize) -> bool {
        self.rows.get(index).is_some_and(PresentationRow::is_group)
    }

    #[must_use]
    pub fn row_height(&self, index: usize) -> Option<f32> {
        self.rows.get(index).map(|row| {
            if row.is_group() {
                self.settings.group_row_height
            } else {
                self.settings.slider_row_height
            }
        })
    }

    #[must_use]
    pub fn display_name(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(PresentationRow::name)
    }

    /// Weight of a slider row; `None` for headers and out-of-range indices.
    #[must_use]
    pub fn current_value(&self, index: usize) -> Option<f32> {
        self.rows.get(index).and_then(PresentationRow::value)
    }

    /// Index of the slider `leaf` under `group`.
    #[must_use]
    pub fn find_slider(&self, group: &str, leaf: &str) -> Option<usize> {
        self.rows.iter().position(|row| {
            matches!(row, PresentationRow::Slider { name, group: g, .. } if g == group && name == leaf)
        })
    }

    /// Stores a new slider value and returns the event to route.
    ///
    /// The value is clamped before it is stored. Headers and out-of-range
    /// indices are ignored.
    pub fn set_value(&mut self, index: usize, value: f32) -> Option<SliderEvent> {
        let PresentationRow::Slider { name, group, value: stored } = self.rows.get_mut(index)? else {
            return None;
        };
        *stored = clamp_weight(value);
        Some(SliderEvent {
            group: group.clone(),
            leaf: name.clone(),
            value: *stored,
        })
    }
}
