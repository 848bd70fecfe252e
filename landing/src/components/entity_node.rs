use leptos::prelude::*;
use talenthub_content::SchemaEntity;

use super::Icon;

/// ER-diagram box: icon, title, one name/type row per field.
///
/// `emphasized` entities get the bright border and glow treatment.
#[component]
pub fn EntityNode(entity: SchemaEntity) -> impl IntoView {
    let class = if entity.emphasized {
        "entity-node entity-node-glow"
    } else {
        "entity-node"
    };

    view! {
        <div class=class>
            <div class="entity-head">
                <div class="entity-icon">
                    <Icon icon=entity.icon />
                </div>
                <span class="entity-title">{entity.title}</span>
            </div>
            <div class="entity-fields">
                {entity
                    .fields
                    .iter()
                    .map(|field| {
                        view! {
                            <div class="entity-field">
                                <span class="entity-field-name">{field.name}</span>
                                <span class="entity-field-type">{field.ty}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
