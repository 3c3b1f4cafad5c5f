//! Registry of the list pages shown in the dashboard.

use crate::list::filter::{FilterDef, FilterOption};
use crate::list::table::{CellFormat, ColumnDef};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Where the options of a filter come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterSource {
    /// Fetched from the backend lookup endpoint of the given kind.
    Lookup(&'static str),
    /// Fixed `(value, label)` pairs.
    Static(&'static [(&'static str, &'static str)]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceFilter {
    pub def: FilterDef,
    pub source: FilterSource,
}

impl ResourceFilter {
    const fn lookup(key: &'static str, label: &'static str, kind: &'static str) -> Self {
        Self {
            def: FilterDef::new(key, label),
            source: FilterSource::Lookup(kind),
        }
    }

    const fn fixed(
        key: &'static str,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            def: FilterDef::new(key, label),
            source: FilterSource::Static(options),
        }
    }

    /// Options of a static filter; `None` for lookups.
    pub fn static_options(&self) -> Option<Vec<FilterOption>> {
        match self.source {
            FilterSource::Static(options) => Some(
                options
                    .iter()
                    .map(|(value, label)| FilterOption::new(*value, *label))
                    .collect(),
            ),
            FilterSource::Lookup(_) => None,
        }
    }
}

pub const LOOKUP_CATEGORIES: &str = "categories";
pub const LOOKUP_LANGUAGES: &str = "languages";
pub const LOOKUP_COURSES: &str = "courses";
pub const LOOKUP_HOSPITALS: &str = "hospitals";

/// Lookup kinds the JSON API is allowed to proxy.
pub const LOOKUP_KINDS: [&str; 4] = [
    LOOKUP_CATEGORIES,
    LOOKUP_LANGUAGES,
    LOOKUP_COURSES,
    LOOKUP_HOSPITALS,
];

const CATEGORY: ResourceFilter = ResourceFilter::lookup("category", "Category", LOOKUP_CATEGORIES);
const LANGUAGE: ResourceFilter = ResourceFilter::lookup("language", "Language", LOOKUP_LANGUAGES);
const COURSE: ResourceFilter = ResourceFilter::lookup("course", "Course", LOOKUP_COURSES);
const USER_ROLE: ResourceFilter = ResourceFilter::fixed(
    "role",
    "Role",
    &[("user", "User"), ("premium", "Premium"), ("admin", "Admin")],
);
const PAYMENT_STATUS: ResourceFilter = ResourceFilter::fixed(
    "status",
    "Status",
    &[
        ("pending", "Pending"),
        ("succeeded", "Succeeded"),
        ("failed", "Failed"),
        ("refunded", "Refunded"),
    ],
);
const POPUP_ACTIVE: ResourceFilter = ResourceFilter::fixed(
    "active",
    "State",
    &[("true", "Active"), ("false", "Inactive")],
);

const CREATED: ColumnDef = ColumnDef::new("createdAt", "Created")
    .sortable()
    .format(CellFormat::Date);

const COURSE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("title", "Title").sortable(),
    ColumnDef::new("category", "Category").sortable(),
    ColumnDef::new("language", "Language"),
    ColumnDef::new("published", "Published").format(CellFormat::Boolean),
    CREATED,
];
const CHAPTER_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("title", "Title").sortable(),
    ColumnDef::new("course.title", "Course"),
    ColumnDef::new("position", "Order").sortable(),
    CREATED,
];
const STORY_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("title", "Title").sortable(),
    ColumnDef::new("author", "Author").sortable(),
    ColumnDef::new("category", "Category"),
    ColumnDef::new("language", "Language"),
    CREATED,
];
const MUSIC_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("title", "Title").sortable(),
    ColumnDef::new("artist", "Artist").sortable(),
    ColumnDef::new("category", "Category"),
    CREATED,
];
const GAME_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("title", "Title").sortable(),
    ColumnDef::new("category", "Category"),
    ColumnDef::new("minAge", "Age").sortable(),
    CREATED,
];
const USER_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("name", "Name").sortable(),
    ColumnDef::new("email", "Email").sortable(),
    ColumnDef::new("role", "Role"),
    ColumnDef::new("hospital.name", "Hospital"),
    CREATED,
];
const PAYMENT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("user.email", "User"),
    ColumnDef::new("amountCents", "Amount")
        .sortable()
        .format(CellFormat::Money),
    ColumnDef::new("currency", "Currency"),
    ColumnDef::new("status", "Status"),
    CREATED,
];
const HOSPITAL_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("name", "Name").sortable(),
    ColumnDef::new("city", "City").sortable(),
    ColumnDef::new("phone", "Phone"),
    ColumnDef::new("address", "Address"),
    CREATED,
];
const POPUP_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("title", "Title").sortable(),
    ColumnDef::new("active", "Active").format(CellFormat::Boolean),
    ColumnDef::new("startsOn", "Starts").sortable(),
    ColumnDef::new("endsOn", "Ends"),
    CREATED,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Courses,
    Chapters,
    Stories,
    Music,
    Games,
    Users,
    Payments,
    Hospitals,
    Popups,
}

impl Resource {
    pub const ALL: [Resource; 9] = [
        Resource::Courses,
        Resource::Chapters,
        Resource::Stories,
        Resource::Music,
        Resource::Games,
        Resource::Users,
        Resource::Payments,
        Resource::Hospitals,
        Resource::Popups,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resource| resource.slug() == slug)
    }

    /// URL segment of the list page, also the backend collection path.
    pub fn slug(self) -> &'static str {
        match self {
            Resource::Courses => "courses",
            Resource::Chapters => "chapters",
            Resource::Stories => "stories",
            Resource::Music => "music",
            Resource::Games => "games",
            Resource::Users => "users",
            Resource::Payments => "payments",
            Resource::Hospitals => "hospitals",
            Resource::Popups => "popups",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Resource::Courses => "Courses",
            Resource::Chapters => "Chapters",
            Resource::Stories => "Stories",
            Resource::Music => "Music",
            Resource::Games => "Games",
            Resource::Users => "Users",
            Resource::Payments => "Payments",
            Resource::Hospitals => "Hospitals",
            Resource::Popups => "Pop-ups",
        }
    }

    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }

    pub fn columns(self) -> &'static [ColumnDef] {
        match self {
            Resource::Courses => COURSE_COLUMNS,
            Resource::Chapters => CHAPTER_COLUMNS,
            Resource::Stories => STORY_COLUMNS,
            Resource::Music => MUSIC_COLUMNS,
            Resource::Games => GAME_COLUMNS,
            Resource::Users => USER_COLUMNS,
            Resource::Payments => PAYMENT_COLUMNS,
            Resource::Hospitals => HOSPITAL_COLUMNS,
            Resource::Popups => POPUP_COLUMNS,
        }
    }

    pub fn filters(self) -> &'static [ResourceFilter] {
        match self {
            Resource::Courses | Resource::Stories => &[CATEGORY, LANGUAGE],
            Resource::Chapters => &[COURSE],
            Resource::Music | Resource::Games => &[CATEGORY],
            Resource::Users => &[USER_ROLE],
            Resource::Payments => &[PAYMENT_STATUS],
            Resource::Hospitals => &[],
            Resource::Popups => &[POPUP_ACTIVE],
        }
    }

    pub fn filter_defs(self) -> Vec<FilterDef> {
        self.filters().iter().map(|filter| filter.def).collect()
    }

    /// Role needed to see the list.
    pub fn required_role(self) -> &'static str {
        match self {
            Resource::Users | Resource::Payments => SERVICE_ADMIN_ROLE,
            _ => SERVICE_ACCESS_ROLE,
        }
    }

    /// Payments are a ledger and cannot be removed from the dashboard.
    pub fn deletable(self) -> bool {
        !matches!(self, Resource::Payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::query::RESERVED_PARAMS;

    #[test]
    fn slugs_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(Resource::from_slug(resource.slug()), Some(resource));
        }
        assert_eq!(Resource::from_slug("api"), None);
    }

    #[test]
    fn filter_keys_never_collide_with_reserved_params() {
        for resource in Resource::ALL {
            for filter in resource.filters() {
                assert!(!RESERVED_PARAMS.contains(&filter.def.key));
            }
        }
    }

    #[test]
    fn every_list_has_a_sortable_column() {
        for resource in Resource::ALL {
            assert!(resource.columns().iter().any(|column| column.sortable));
        }
    }

    #[test]
    fn static_filters_expose_options() {
        let options = Resource::Popups.filters()[0].static_options().unwrap();
        assert_eq!(options[0], FilterOption::new("true", "Active"));
        assert_eq!(Resource::Courses.filters()[0].static_options(), None);
    }

    #[test]
    fn admin_only_lists() {
        assert_eq!(Resource::Users.required_role(), SERVICE_ADMIN_ROLE);
        assert_eq!(Resource::Payments.required_role(), SERVICE_ADMIN_ROLE);
        assert_eq!(Resource::Stories.required_role(), SERVICE_ACCESS_ROLE);
    }
}
