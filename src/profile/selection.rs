use serde::Serialize;

use crate::error::AppResult;

use super::catalog::ProfileCatalog;

pub const SELECT_PLACEHOLDER: &str = "Select a profile to search for copybooks";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceItem {
    pub label: String,
    pub description: String,
}

/// Renders a list of choices and waits for the user to pick one.
///
/// `Ok(None)` means the user dismissed the list without picking anything.
#[allow(async_fn_in_trait)]
pub trait ChoicePresenter {
    async fn pick(&self, placeholder: &str, items: &[ChoiceItem]) -> AppResult<Option<usize>>;
}

/// One entry per profile, the default profile first and the rest in catalog order.
pub fn present_choices(catalog: &ProfileCatalog, default_name: Option<&str>) -> Vec<ChoiceItem> {
    let mut items = Vec::with_capacity(catalog.len());
    for (name, profile) in catalog.iter() {
        let item = ChoiceItem {
            label: name.to_string(),
            description: profile.to_string(),
        };
        if default_name == Some(name) {
            items.insert(0, item);
        } else {
            items.push(item);
        }
    }
    items
}

pub async fn choose<P: ChoicePresenter>(
    items: &[ChoiceItem],
    presenter: &P,
) -> AppResult<Option<String>> {
    let picked = presenter.pick(SELECT_PLACEHOLDER, items).await?;
    Ok(picked
        .and_then(|index| items.get(index))
        .map(|item| item.label.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;

    fn catalog() -> ProfileCatalog {
        [
            ("PROFA", Profile::new("u1", "h1", 1)),
            ("PROFB", Profile::new("u2", "h2", 2)),
            ("PROFC", Profile::new("u3", "h3", 3)),
        ]
        .into_iter()
        .collect()
    }

    fn labels(items: &[ChoiceItem]) -> Vec<&str> {
        items.iter().map(|item| item.label.as_str()).collect()
    }

    struct Fixed(Option<usize>);

    impl ChoicePresenter for Fixed {
        async fn pick(&self, _placeholder: &str, _items: &[ChoiceItem]) -> AppResult<Option<usize>> {
            Ok(self.0)
        }
    }

    #[test]
    fn default_profile_comes_first() {
        let items = present_choices(&catalog(), Some("PROFC"));
        assert_eq!(labels(&items), ["PROFC", "PROFA", "PROFB"]);
        assert_eq!(items[0].description, "u3@h3:3");
    }

    #[test]
    fn keeps_catalog_order_without_known_default() {
        assert_eq!(labels(&present_choices(&catalog(), None)), ["PROFA", "PROFB", "PROFC"]);
        assert_eq!(
            labels(&present_choices(&catalog(), Some("NOPE"))),
            ["PROFA", "PROFB", "PROFC"]
        );
    }

    #[tokio::test]
    async fn choose_returns_picked_label() {
        let items = present_choices(&catalog(), Some("PROFB"));
        let chosen = choose(&items, &Fixed(Some(0))).await.expect("pick");
        assert_eq!(chosen.as_deref(), Some("PROFB"));
    }

    #[tokio::test]
    async fn cancel_and_out_of_range_are_absence() {
        let items = present_choices(&catalog(), None);
        assert_eq!(choose(&items, &Fixed(None)).await.expect("pick"), None);
        assert_eq!(choose(&items, &Fixed(Some(7))).await.expect("pick"), None);
    }
}
