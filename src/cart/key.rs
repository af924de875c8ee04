//! Customization identity.

use smallvec::SmallVec;

use crate::{cart::Customizations, catalog::AddOn};

type IdList = SmallVec<[String; 2]>;

/// Order-independent identity of a customization selection.
///
/// Two selections compare equal iff they pick the same add-on ids per
/// category, regardless of the order the user picked them in. This is the key
/// cart lines are merged by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomizationKey {
    dips: IdList,
    beverages: IdList,
    drinks: IdList,
}

impl CustomizationKey {
    pub(crate) fn of(customizations: &Customizations) -> Self {
        Self {
            dips: sorted_ids(&customizations.dips),
            beverages: sorted_ids(&customizations.beverages),
            drinks: sorted_ids(&customizations.drinks),
        }
    }
}

fn sorted_ids(selections: &[AddOn]) -> IdList {
    let mut ids: IdList = selections.iter().map(|addon| addon.id.clone()).collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addon(id: &str) -> AddOn {
        AddOn {
            id: id.to_string(),
            name: format!("addon {id}"),
            price: 5900,
        }
    }

    #[test]
    fn key_ignores_selection_order() {
        let forwards = Customizations {
            dips: vec![addon("d1"), addon("d2")],
            ..Customizations::default()
        };
        let backwards = Customizations {
            dips: vec![addon("d2"), addon("d1")],
            ..Customizations::default()
        };

        assert_eq!(CustomizationKey::of(&forwards), CustomizationKey::of(&backwards));
    }

    #[test]
    fn key_distinguishes_categories() {
        let as_dip = Customizations {
            dips: vec![addon("x")],
            ..Customizations::default()
        };
        let as_drink = Customizations {
            drinks: vec![addon("x")],
            ..Customizations::default()
        };

        assert_ne!(CustomizationKey::of(&as_dip), CustomizationKey::of(&as_drink));
    }

    #[test]
    fn key_distinguishes_different_selections() {
        let one = Customizations {
            beverages: vec![addon("bev1")],
            ..Customizations::default()
        };
        let two = Customizations {
            beverages: vec![addon("bev2")],
            ..Customizations::default()
        };

        assert_ne!(CustomizationKey::of(&one), CustomizationKey::of(&two));
    }
}
