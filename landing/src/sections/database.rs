use leptos::prelude::*;
use talenthub_content::Icon as IconId;
use talenthub_content::page::{
    CANDIDATE_ENTITY, CHILD_ENTITIES, QUERIES_DML, SCHEMA_DDL, USER_ENTITY,
};

use crate::components::{CodeBlock, EntityNode, Icon, SectionHeader};

/// ER-diagram illustration plus the DDL/DML listings.
///
/// The connector lines are a fixed SVG layer behind the entity boxes; the
/// boxes themselves are normal flow content, so the diagram degrades
/// gracefully on narrow viewports.
#[component]
pub fn DatabaseSection() -> impl IntoView {
    view! {
        <section id="database" class="section">
            <SectionHeader
                number=3
                title="Database Schema"
                subtitle="Relational integrity modeled with Prisma and executed on MySQL."
            />

            <div class="er-diagram">
                <div class="er-heading">
                    <Icon icon=IconId::Package />
                    <h3>"Entity Relationship Diagram"</h3>
                </div>

                <div class="er-canvas">
                    <svg
                        class="er-lines"
                        viewBox="0 0 800 560"
                        preserveAspectRatio="none"
                        aria-hidden="true"
                    >
                        // User to Candidate
                        <path d="M400 120 V 220" class="er-link er-link-dashed" />
                        // Candidate to its children
                        <path d="M400 360 V 420 H 200 V 460" class="er-link" />
                        <path d="M400 360 V 420 H 600 V 460" class="er-link" />
                        // cardinality markers
                        <circle cx="400" cy="120" r="3" class="er-marker" />
                        <circle cx="400" cy="220" r="3" class="er-marker er-marker-bright" />
                    </svg>

                    <EntityNode entity=USER_ENTITY />
                    <EntityNode entity=CANDIDATE_ENTITY />
                    <div class="er-children">
                        {CHILD_ENTITIES
                            .into_iter()
                            .map(|entity| view! { <EntityNode entity=entity /> })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="sql-columns">
                <div class="sql-column">
                    <h3 class="sql-heading">
                        <Icon icon=IconId::Database size="16" />
                        "Schema Definition (DDL)"
                    </h3>
                    <CodeBlock title="schema.sql" code=SCHEMA_DDL />
                </div>
                <div class="sql-column">
                    <h3 class="sql-heading">
                        <Icon icon=IconId::Terminal size="16" />
                        "Business Logic (DML)"
                    </h3>
                    <CodeBlock title="queries.sql" code=QUERIES_DML />
                </div>
            </div>
        </section>
    }
}
