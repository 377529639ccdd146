use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque widget identifier. Minted by the store, never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WidgetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Chart,
    Table,
    Metric,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 3] = [WidgetKind::Chart, WidgetKind::Table, WidgetKind::Metric];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Chart => "chart",
            WidgetKind::Table => "table",
            WidgetKind::Metric => "metric",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WidgetKind::Chart => "Chart",
            WidgetKind::Table => "Table",
            WidgetKind::Metric => "Metric",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Sm,
    Md,
    Lg,
}

impl Default for WidgetSize {
    fn default() -> Self {
        Self::Md
    }
}

impl WidgetSize {
    pub const ALL: [WidgetSize; 3] = [WidgetSize::Sm, WidgetSize::Md, WidgetSize::Lg];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetSize::Sm => "sm",
            WidgetSize::Md => "md",
            WidgetSize::Lg => "lg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WidgetSize::Sm => "Small (1 column)",
            WidgetSize::Md => "Medium (2 columns)",
            WidgetSize::Lg => "Large (3 columns)",
        }
    }

    /// Number of grid columns the widget occupies.
    pub fn column_span(&self) -> usize {
        match self {
            WidgetSize::Sm => 1,
            WidgetSize::Md => 2,
            WidgetSize::Lg => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Area,
}

impl Default for ChartType {
    fn default() -> Self {
        Self::Bar
    }
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [ChartType::Bar, ChartType::Line, ChartType::Pie, ChartType::Area];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Area => "area",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Area => "Area Chart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    Mock,
    Api,
    Sheets,
}

impl Default for DataSourceKind {
    fn default() -> Self {
        Self::Mock
    }
}

impl DataSourceKind {
    pub const ALL: [DataSourceKind; 3] = [
        DataSourceKind::Mock,
        DataSourceKind::Api,
        DataSourceKind::Sheets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceKind::Mock => "mock",
            DataSourceKind::Api => "api",
            DataSourceKind::Sheets => "sheets",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataSourceKind::Mock => "Mock Data",
            DataSourceKind::Api => "API Endpoint",
            DataSourceKind::Sheets => "Google Sheets",
        }
    }
}

/// Widget type together with the fields that only exist for that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WidgetContent {
    Chart {
        #[serde(rename = "chartType", default)]
        chart_type: ChartType,
    },
    Table,
    Metric,
}

impl WidgetContent {
    /// Build the content for `kind`, keeping `chart_type` only for charts.
    pub fn from_kind(kind: WidgetKind, chart_type: ChartType) -> Self {
        match kind {
            WidgetKind::Chart => WidgetContent::Chart { chart_type },
            WidgetKind::Table => WidgetContent::Table,
            WidgetKind::Metric => WidgetContent::Metric,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetContent::Chart { .. } => WidgetKind::Chart,
            WidgetContent::Table => WidgetKind::Table,
            WidgetContent::Metric => WidgetKind::Metric,
        }
    }

    pub fn chart_type(&self) -> Option<ChartType> {
        match self {
            WidgetContent::Chart { chart_type } => Some(*chart_type),
            _ => None,
        }
    }
}

/// Full configuration record of a dashboard widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    pub id: WidgetId,
    pub title: String,
    #[serde(flatten)]
    pub content: WidgetContent,
    pub size: WidgetSize,
    #[serde(rename = "dataSource", default)]
    pub data_source: DataSourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl WidgetDescriptor {
    pub fn new(id: impl Into<WidgetId>, title: &str, content: WidgetContent, size: WidgetSize) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            content,
            size,
            data_source: DataSourceKind::Mock,
            data: None,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.content.kind()
    }

    pub fn chart_type(&self) -> Option<ChartType> {
        self.content.chart_type()
    }
}

/// Widgets present on a fresh dashboard.
pub fn seed_widgets() -> Vec<WidgetDescriptor> {
    vec![
        WidgetDescriptor::new(
            "1",
            "Revenue Overview",
            WidgetContent::Chart {
                chart_type: ChartType::Bar,
            },
            WidgetSize::Md,
        ),
        WidgetDescriptor::new(
            "2",
            "Monthly Visitors",
            WidgetContent::Chart {
                chart_type: ChartType::Line,
            },
            WidgetSize::Md,
        ),
        WidgetDescriptor::new("3", "Top Products", WidgetContent::Table, WidgetSize::Md),
        WidgetDescriptor::new("4", "Conversion Rate", WidgetContent::Metric, WidgetSize::Sm),
        WidgetDescriptor::new(
            "5",
            "Customer Satisfaction",
            WidgetContent::Chart {
                chart_type: ChartType::Pie,
            },
            WidgetSize::Md,
        ),
    ]
}
