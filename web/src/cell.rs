use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct CellProps {
    pub is_lit: bool,
    pub on_flip: Callback<()>,
}

pub(crate) fn cell_classes(is_lit: bool) -> Classes {
    classes!("cell", is_lit.then_some("lit"))
}

/// One light. Knows nothing about its position, it only reports clicks.
#[function_component(CellView)]
pub(crate) fn cell_component(props: &CellProps) -> Html {
    let CellProps { is_lit, on_flip } = props.clone();
    let class = cell_classes(is_lit);

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell clicked (lit: {})", is_lit);
        on_flip.emit(());
    });

    html! {
        <td {class} {onclick}/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_cell_gets_lit_class() {
        let class = cell_classes(true);

        assert!(class.contains("cell"));
        assert!(class.contains("lit"));
    }

    #[test]
    fn dark_cell_has_only_base_class() {
        let class = cell_classes(false);

        assert!(class.contains("cell"));
        assert!(!class.contains("lit"));
        assert_eq!((&class).into_iter().count(), 1);
    }
}
