use shared::Permissions;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PermissionChecklistProps {
    /// Every permission, in display order
    pub available: Vec<String>,
    pub selected: Permissions,
    /// Emits (permission, checked)
    pub on_toggle: Callback<(String, bool)>,
    /// Keeps checkbox ids unique when two checklists are on the page
    pub id_prefix: AttrValue,
}

#[function_component(PermissionChecklist)]
pub fn permission_checklist(props: &PermissionChecklistProps) -> Html {
    html! {
        <div class="permission-grid">
            { for props.available.iter().map(|permission| {
                let id = format!("{}-{}", props.id_prefix, permission);
                let on_change = {
                    let on_toggle = props.on_toggle.clone();
                    let permission = permission.clone();
                    Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_toggle.emit((permission.clone(), input.checked()));
                    })
                };
                html! {
                    <label key={permission.clone()} class="permission-option" for={id.clone()}>
                        <input
                            type="checkbox"
                            id={id}
                            value={permission.clone()}
                            checked={props.selected.contains(permission)}
                            onchange={on_change}
                        />
                        <span>{ permission }</span>
                    </label>
                }
            }) }
        </div>
    }
}
