//! Crafting station: three ingredient slots and the recipe book.

use castquest_chain::Rarity;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Number of ingredient slots.
pub const SLOT_COUNT: usize = 3;

/// A recipe in the recipe book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CraftingRecipe {
    /// Recipe id.
    pub id: u32,
    /// Result name.
    pub name: &'static str,
    /// Result rarity.
    pub rarity: Rarity,
    /// Required ingredients, with quantities folded into the text.
    pub ingredients: &'static [&'static str],
    /// Result icon.
    pub icon: &'static str,
    /// Result stat summary.
    pub stats: &'static str,
}

/// One ingredient slot as rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotView {
    /// `Ingredient Slot 1` when empty, else the ingredient.
    pub label: String,
    /// Whether something is in the slot.
    pub filled: bool,
}

/// One recipe card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeCard {
    /// Recipe id.
    pub id: u32,
    /// Result icon.
    pub icon: &'static str,
    /// Result name.
    pub name: &'static str,
    /// Rarity badge text.
    pub badge: &'static str,
    /// Result stat summary.
    pub stats: &'static str,
    /// Ingredient badges.
    pub ingredients: Vec<&'static str>,
}

/// The crafting page view model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CraftingView {
    /// The three slots.
    pub slots: Vec<SlotView>,
    /// Whether the craft button is enabled.
    pub can_craft: bool,
    /// Recipe book.
    pub recipes: Vec<RecipeCard>,
}

/// Crafting page UI state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CraftingPage {
    slots: [Option<String>; SLOT_COUNT],
}

impl CraftingPage {
    /// Puts `ingredient` into `slot` (0-based), replacing what was there.
    ///
    /// # Errors
    ///
    /// [`AppError::InvalidSlot`] if `slot` is out of range.
    pub fn select_ingredient(
        &mut self,
        slot: usize,
        ingredient: impl Into<String>,
    ) -> AppResult<()> {
        let entry = self.slots.get_mut(slot).ok_or(AppError::InvalidSlot(slot))?;
        let ingredient = ingredient.into();
        debug!(slot, ingredient = %ingredient, "ingredient selected");
        *entry = Some(ingredient);
        Ok(())
    }

    /// Empties `slot`. Out-of-range slots are ignored.
    pub fn clear_slot(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = None;
        }
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Contents of `slot`.
    #[must_use]
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).and_then(Option::as_deref)
    }

    /// True once every slot is filled.
    #[must_use]
    pub fn can_craft(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Renders the slots and `recipes`.
    #[must_use]
    pub fn render(&self, recipes: &[CraftingRecipe]) -> CraftingView {
        let slots = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| match slot {
                Some(ingredient) => SlotView {
                    label: ingredient.clone(),
                    filled: true,
                },
                None => SlotView {
                    label: format!("Ingredient Slot {}", i + 1),
                    filled: false,
                },
            })
            .collect();

        let recipes = recipes
            .iter()
            .map(|recipe| RecipeCard {
                id: recipe.id,
                icon: recipe.icon,
                name: recipe.name,
                badge: recipe.rarity.badge(),
                stats: recipe.stats,
                ingredients: recipe.ingredients.to_vec(),
            })
            .collect();

        CraftingView {
            slots,
            can_craft: self.can_craft(),
            recipes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_empty_station_cannot_craft() {
        let view = CraftingPage::default().render(mock::RECIPES);
        assert!(!view.can_craft);
        assert_eq!(view.slots[0].label, "Ingredient Slot 1");
        assert_eq!(view.slots[2].label, "Ingredient Slot 3");
        assert_eq!(view.recipes.len(), 4);
    }

    #[test]
    fn test_craft_enabled_only_when_full() {
        let mut page = CraftingPage::default();
        page.select_ingredient(0, "Iron Sword").unwrap();
        page.select_ingredient(1, "Dragon Scale").unwrap();
        assert!(!page.can_craft());

        page.select_ingredient(2, "Magic Essence").unwrap();
        assert!(page.can_craft());
        assert!(page.render(mock::RECIPES).can_craft);

        page.clear_slot(1);
        assert!(!page.can_craft());
        assert_eq!(page.ingredient(1), None);
        assert_eq!(page.ingredient(0), Some("Iron Sword"));
    }

    #[test]
    fn test_invalid_slot() {
        let mut page = CraftingPage::default();
        assert_eq!(
            page.select_ingredient(3, "Gold Coin"),
            Err(AppError::InvalidSlot(3))
        );
        page.clear_slot(7);
        assert_eq!(page, CraftingPage::default());
    }

    #[test]
    fn test_recipe_cards() {
        let view = CraftingPage::default().render(mock::RECIPES);
        let armor = &view.recipes[1];
        assert_eq!(armor.name, "Dragon Armor");
        assert_eq!(armor.badge, "LEGENDARY");
        assert_eq!(armor.ingredients, ["Dragon Scale x3", "Phoenix Feather", "Ancient Rune"]);
    }
}
