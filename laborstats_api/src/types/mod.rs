pub mod flag;

mod resource;
pub use self::resource::Resource;

mod catalog;
pub use self::catalog::{AdvancementLevel, Good, Region, Sector};

mod country;
pub use self::country::{Country, CountryData, CountryGood, CountryProfile, CountryStat};

mod action;
pub use self::action::{SuggestedAction, SuggestedActionArea};
