use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Kind of service a listing offers.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum Category {
    Cleaning,
    PetWalking,
    Moving,
}

impl Category {
    /// Name shown to users.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cleaning => "입주청소",
            Self::PetWalking => "애완동물 산책",
            Self::Moving => "용달 이사",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.write_str(self.label())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "전체",
            Self::Only(c) => c.label(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(from: Category) -> Self {
        Self::Only(from)
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(from: Option<Category>) -> Self {
        from.map_or(Self::All, Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_in_declaration_order() {
        let all: Vec<_> = Category::all().collect();
        assert_eq!(all.len(), Category::COUNT);
        assert_eq!(
            all,
            vec![Category::Cleaning, Category::PetWalking, Category::Moving]
        );
    }

    #[test]
    fn filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Moving));
        assert!(CategoryFilter::from(Category::Moving).matches(Category::Moving));
        assert!(!CategoryFilter::from(Category::Moving).matches(Category::Cleaning));
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
    }
}
