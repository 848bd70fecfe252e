//! The literal page content, one constant per display surface.
//!
//! Values mirror the published report exactly; tests at the bottom pin the
//! display facts the page advertises (card count, chart series, ER boxes).

use crate::types::{
    ChartPoint, Feature, Icon, Limitation, NavItem, Phase, RoadmapItem, SchemaEntity, SchemaField,
    StatHighlight, TechCategory, TechItem,
};

/// Navbar entries; `id` doubles as the section anchor.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { id: "overview", label: "Overview" },
    NavItem { id: "architecture", label: "Architecture" },
    NavItem { id: "database", label: "Database" },
    NavItem { id: "process", label: "Process" },
    NavItem { id: "future", label: "Roadmap" },
];

/// The four overview feature cards.
pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::Layout,
        title: "Centralized Hub",
        desc: "Unified dashboard for tracking application statuses, interview schedules, and \
               hiring metrics in one view.",
    },
    Feature {
        icon: Icon::ShieldCheck,
        title: "RBAC Security",
        desc: "Distinct, secure environments for Recruiters (Admins) and Candidates with \
               NextAuth.js middleware.",
    },
    Feature {
        icon: Icon::Cpu,
        title: "AI Fit Score",
        desc: "Algorithmic candidate ranking system analyzing skills and experience to surface \
               top talent instantly.",
    },
    Feature {
        icon: Icon::Zap,
        title: "Interactive Workflow",
        desc: "Kanban-style status updates with instant visual feedback and smooth animations.",
    },
];

/// Sample applications-per-day series behind the analytics chart.
pub const WEEKLY_APPLICATIONS: [ChartPoint; 7] = [
    ChartPoint { name: "Mon", apps: 4 },
    ChartPoint { name: "Tue", apps: 7 },
    ChartPoint { name: "Wed", apps: 15 },
    ChartPoint { name: "Thu", apps: 10 },
    ChartPoint { name: "Fri", apps: 18 },
    ChartPoint { name: "Sat", apps: 23 },
    ChartPoint { name: "Sun", apps: 20 },
];

/// Headline stats next to the chart.
pub const PIPELINE_STATS: [StatHighlight; 2] = [
    StatHighlight { label: "Total Candidates", value: "1,248" },
    StatHighlight { label: "Interview Rate", value: "18.5%" },
];

/// Technology tiles in the architecture section.
pub const TECH_STACK: [TechItem; 6] = [
    TechItem { name: "Next.js 15", category: TechCategory::Frontend, icon: Icon::Layers },
    TechItem { name: "Tailwind CSS v4", category: TechCategory::Styling, icon: Icon::Layout },
    TechItem { name: "Prisma ORM", category: TechCategory::Database, icon: Icon::Database },
    TechItem { name: "MySQL", category: TechCategory::Storage, icon: Icon::Server },
    TechItem { name: "Serverless Fn", category: TechCategory::Backend, icon: Icon::Code },
    TechItem { name: "Framer Motion", category: TechCategory::Animation, icon: Icon::Zap },
];

/// Top box of the ER diagram.
pub const USER_ENTITY: SchemaEntity = SchemaEntity {
    title: "User (Recruiter)",
    icon: Icon::Users,
    fields: &[
        SchemaField { name: "id", ty: "PK INT" },
        SchemaField { name: "email", ty: "UK String" },
        SchemaField { name: "role", ty: "String" },
    ],
    emphasized: false,
};

/// Center box of the ER diagram; visually emphasized.
pub const CANDIDATE_ENTITY: SchemaEntity = SchemaEntity {
    title: "Candidate",
    icon: Icon::UserCircle,
    fields: &[
        SchemaField { name: "id", ty: "PK INT" },
        SchemaField { name: "userId", ty: "FK INT" },
        SchemaField { name: "status", ty: "String" },
        SchemaField { name: "score", ty: "Float" },
    ],
    emphasized: true,
};

/// Child boxes of the ER diagram, left to right.
pub const CHILD_ENTITIES: [SchemaEntity; 2] = [
    SchemaEntity {
        title: "Skills",
        icon: Icon::Award,
        fields: &[
            SchemaField { name: "id", ty: "PK INT" },
            SchemaField { name: "candidateId", ty: "FK INT" },
            SchemaField { name: "skillName", ty: "String" },
        ],
        emphasized: false,
    },
    SchemaEntity {
        title: "Interviews",
        icon: Icon::Calendar,
        fields: &[
            SchemaField { name: "id", ty: "PK INT" },
            SchemaField { name: "candidateId", ty: "FK INT" },
            SchemaField { name: "date", ty: "DateTime" },
            SchemaField { name: "status", ty: "String" },
        ],
        emphasized: false,
    },
];

/// Development-methodology phases.
pub const PHASES: [Phase; 4] = [
    Phase {
        number: "01",
        title: "Requirement Analysis",
        description: "Identified pain points in traditional ATS. Defined core features: \
                      Dashboard & Candidate Management.",
        items: &["User Stories", "Scope Definition"],
    },
    Phase {
        number: "02",
        title: "System Design",
        description: "Modeled the relationship schema (User <-> Candidate) and designed RESTful \
                      API routes.",
        items: &["ER Diagram", "API Specs"],
    },
    Phase {
        number: "03",
        title: "Implementation",
        description: "Built the \"Glass Panel\" design system first, then integrated Backend/DB \
                      logic.",
        items: &["Frontend First", "Next.js API"],
    },
    Phase {
        number: "04",
        title: "Polish & Verify",
        description: "Conducted rigorous code reviews (\"pente fino\"), linting, and performance \
                      optimization.",
        items: &["Refactoring", "Testing"],
    },
];

/// Roadmap rows, top to bottom.
pub const ROADMAP_ITEMS: [RoadmapItem; 3] = [
    RoadmapItem {
        icon: Icon::CheckCircle,
        title: "True AI Integration",
        desc: "Integrate OpenAI API to parse uploaded CV PDFs and generate real-time \
               \"Fit Scores\" and summaries.",
    },
    RoadmapItem {
        icon: Icon::Users,
        title: "Public Job Board",
        desc: "Public-facing page for unauthenticated users to apply for open roles directly.",
    },
    RoadmapItem {
        icon: Icon::Zap,
        title: "Mobile App",
        desc: "React Native companion app for recruiters to review candidates on the go.",
    },
];

/// Bullets of the limitations panel.
pub const LIMITATIONS: [Limitation; 3] = [
    Limitation {
        title: "Legacy Code Cleanup",
        desc: "Evolving from \"APX\" to \"TALENTHUB\" required complex refactoring to ensure \
               branding consistency.",
    },
    Limitation {
        title: "Type Safety",
        desc: "Handling complex JSON fields like `experience` across API boundaries challenged \
               TypeScript compliance.",
    },
    Limitation {
        title: "Simulated Data",
        desc: "Current \"Fit Score\" is algorithmic, not LLM-driven. File uploads are currently \
               mocked.",
    },
];

/// Schema-definition listing shown in the `schema.sql` code block.
pub const SCHEMA_DDL: &str = r#"-- Create Users Table
CREATE TABLE users (
    id INTEGER NOT NULL AUTO_INCREMENT,
    email VARCHAR(191) NOT NULL,
    name VARCHAR(191) NOT NULL,
    password VARCHAR(191) NOT NULL,
    role VARCHAR(191) NOT NULL DEFAULT 'recruiter',
    createdAt DATETIME(3) NOT NULL DEFAULT CURRENT_TIMESTAMP(3),
    PRIMARY KEY (id),
    UNIQUE INDEX users_email_key(email)
);

-- Create Candidates Table
CREATE TABLE candidates (
    id INTEGER NOT NULL AUTO_INCREMENT,
    name VARCHAR(191) NOT NULL,
    email VARCHAR(191) NOT NULL,
    role VARCHAR(191) NOT NULL,
    status VARCHAR(191) NOT NULL DEFAULT 'pending',
    score DOUBLE NOT NULL DEFAULT 0,
    scoreBreakdown JSON NULL,
    experience JSON NULL,
    photoUrl VARCHAR(191) NULL,
    appliedDate DATETIME(3) NOT NULL DEFAULT CURRENT_TIMESTAMP(3),
    updatedAt DATETIME(3) NOT NULL,
    userId INTEGER NULL,
    createdById INTEGER NULL,
    PRIMARY KEY (id),
    UNIQUE INDEX candidates_email_key(email)
);

-- Create Skills Table
CREATE TABLE candidate_skills (
    id INTEGER NOT NULL AUTO_INCREMENT,
    candidateId INTEGER NOT NULL,
    skillName VARCHAR(191) NOT NULL,
    PRIMARY KEY (id),
    UNIQUE INDEX candidate_skills_candidateId_skillName_key(candidateId, skillName)
);"#;

/// Example-query listing shown in the `queries.sql` code block.
pub const QUERIES_DML: &str = r#"-- Insert a New Candidate
INSERT INTO candidates (name, email, role, status, score, appliedDate, updatedAt)
VALUES ('Jane Doe', 'jane@example.com', 'Senior Developer', 'pending', 95.5, NOW(), NOW());

-- Update Candidate Status
UPDATE candidates
SET status = 'qualified', updatedAt = NOW()
WHERE id = 101;

-- Retrieve Dashboard Stats
SELECT COUNT(*) FROM candidates;
SELECT COUNT(*) FROM candidates WHERE status = 'qualified';

-- Delete a Candidate (Cascade)
DELETE FROM candidates WHERE id = 101;

-- Join Query: Get Candidates with Skills
SELECT c.name, c.score, s.skillName
FROM candidates c
JOIN candidate_skills s ON c.id = s.candidateId
WHERE c.status = 'qualified';"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_anchors_match_section_ids() {
        let ids: Vec<&str> = NAV_ITEMS.iter().map(|n| n.id).collect();
        assert_eq!(ids, ["overview", "architecture", "database", "process", "future"]);
    }

    #[test]
    fn exactly_four_feature_cards_in_order() {
        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            ["Centralized Hub", "RBAC Security", "AI Fit Score", "Interactive Workflow"]
        );
    }

    #[test]
    fn chart_series_is_the_published_week() {
        let labels: Vec<&str> = WEEKLY_APPLICATIONS.iter().map(|p| p.name).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

        let values: Vec<u32> = WEEKLY_APPLICATIONS.iter().map(|p| p.apps).collect();
        assert_eq!(values, [4, 7, 15, 10, 18, 23, 20]);
    }

    #[test]
    fn er_diagram_has_user_candidate_and_two_children() {
        assert_eq!(USER_ENTITY.title, "User (Recruiter)");
        assert!(!USER_ENTITY.emphasized);

        assert_eq!(CANDIDATE_ENTITY.title, "Candidate");
        assert!(CANDIDATE_ENTITY.emphasized);

        let children: Vec<&str> = CHILD_ENTITIES.iter().map(|e| e.title).collect();
        assert_eq!(children, ["Skills", "Interviews"]);
    }

    #[test]
    fn every_entity_lists_its_fields() {
        for entity in [USER_ENTITY, CANDIDATE_ENTITY, CHILD_ENTITIES[0], CHILD_ENTITIES[1]] {
            assert!(!entity.fields.is_empty(), "{} has no fields", entity.title);
            assert_eq!(entity.fields[0].name, "id");
        }
    }

    #[test]
    fn phases_are_sequential_and_tagged() {
        let numbers: Vec<&str> = PHASES.iter().map(|p| p.number).collect();
        assert_eq!(numbers, ["01", "02", "03", "04"]);
        for phase in &PHASES {
            assert!(!phase.items.is_empty(), "phase {} has no tags", phase.number);
        }
    }

    #[test]
    fn roadmap_and_limitations_are_three_each() {
        assert_eq!(ROADMAP_ITEMS.len(), 3);
        assert_eq!(LIMITATIONS.len(), 3);
        assert_eq!(ROADMAP_ITEMS[0].title, "True AI Integration");
        assert_eq!(LIMITATIONS[0].title, "Legacy Code Cleanup");
    }

    #[test]
    fn sql_listings_cover_the_three_tables() {
        for table in ["users", "candidates", "candidate_skills"] {
            assert!(SCHEMA_DDL.contains(&format!("CREATE TABLE {table}")));
        }
        for verb in ["INSERT INTO", "UPDATE", "SELECT", "DELETE FROM", "JOIN"] {
            assert!(QUERIES_DML.contains(verb), "DML listing is missing {verb}");
        }
    }

    #[test]
    fn content_exports_as_json() {
        let json = serde_json::to_value(WEEKLY_APPLICATIONS[0]).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Mon", "apps": 4 }));

        let stats = serde_json::to_string(&PIPELINE_STATS).unwrap();
        assert!(stats.contains("1,248"));
    }
}
