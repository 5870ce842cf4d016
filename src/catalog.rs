use crate::models::ProjectRecord;

/// Read-only source of portfolio projects. The handler only needs `list`,
/// so a future database-backed catalog can slot in behind the same trait.
pub trait ProjectSource: Send + Sync {
    fn list(&self) -> &[ProjectRecord];
}

/// In-memory catalog built once at startup.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    projects: Vec<ProjectRecord>,
}

impl StaticCatalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        StaticCatalog { projects }
    }

    /// The portfolio's current project list, in display order.
    pub fn with_default_projects() -> Self {
        Self::new(default_projects())
    }
}

impl ProjectSource for StaticCatalog {
    fn list(&self) -> &[ProjectRecord] {
        &self.projects
    }
}

fn default_projects() -> Vec<ProjectRecord> {
    vec![
        project(
            "shoghlana",
            "Shoghlana — AI Recruitment SaaS",
            "منصة توظيف ذكية مؤتمتة بالذكاء الاصطناعي لربط العملاء بالمواهب",
            "SaaS · AI · Automation",
            "2024",
            &["n8n", "LLMs", "AI Agents", "Google Sheets"],
            Some("https://omarmaher23942-wq.github.io/Omar-Maher65/"),
            Some("https://t.me/sho_8_lana_b"),
            "assets/images/projects/shoghlana.jpg",
            true,
        ),
        project(
            "meta-support",
            "Meta Customer Support AI System",
            "منظومة دعم فني ذكية متعددة الوسائط",
            "AI · Support · Multi-Modal",
            "2024",
            &["n8n", "AI Agents", "Multi-Modal AI", "Gmail"],
            None,
            Some("https://t.me/meta_customer_support_bot"),
            "assets/images/projects/meta-support.jpg",
            false,
        ),
        project(
            "koshary-abu-tarek",
            "كشري أبو طارق — Multi-Modal AI Restaurant",
            "منصة أتمتة طلبات مطاعم متعددة القنوات والوسائط",
            "Enterprise · F&B",
            "2024",
            &["n8n", "Multi-Modal AI", "Google Workspace"],
            None,
            Some("https://t.me/koshari_abo_tarek_bot"),
            "assets/images/projects/koshary.jpg",
            false,
        ),
        project(
            "my-doctor",
            "طبيبي الذكي — AI Doctor Booking",
            "نظام حجز أطباء ذكي بالذكاء الاصطناعي",
            "Healthcare · AI",
            "2024",
            &["n8n", "AI Agents", "Telegram Bot", "Google Sheets"],
            None,
            None,
            "assets/images/projects/my-doctor.jpg",
            false,
        ),
        project(
            "smart-job-automation",
            "أتمتة ذكية لتجميع الوظائف",
            "جلب من مستقل، تصنيف بـ LLM، إرسال الوظائف المناسبة",
            "Automation · LLM",
            "2024",
            &["n8n", "LLM", "RSS/Feeds"],
            None,
            None,
            "assets/images/projects/job-aggregation.jpg",
            false,
        ),
        project(
            "multi-modal-orchestrator",
            "Multi-Modal AI Orchestrator Agent",
            "نص، صوت، صورة عبر WhatsApp → توجيه لـ Agents متخصصة",
            "AI · Orchestration",
            "2024",
            &["Multi-Modal AI", "Orchestration", "WhatsApp"],
            None,
            None,
            "assets/images/projects/orchestrator.jpg",
            false,
        ),
        project(
            "smart-sip-galaxy",
            "Smart Sip Galaxy 2026",
            "معرض مشروبات ذكي متعدد اللغات، Glassmorphism، 5 لغات",
            "Frontend · i18n · UX",
            "2025",
            &["HTML5", "CSS3", "JavaScript ES6+"],
            None,
            None,
            "assets/images/projects/smart-sip.jpg",
            false,
        ),
        project(
            "ai-crm-automation",
            "AI CRM Automation System",
            "CRM workflows and lead routing with AI",
            "CRM · AI · BPA",
            "2024",
            &["n8n", "AI Agents", "CRM APIs"],
            None,
            None,
            "assets/images/projects/crm.jpg",
            false,
        ),
        project(
            "telegram-lead-routing",
            "Telegram Lead Routing AI",
            "توجيه وتأهيل العملاء المحتملين",
            "AI · Sales",
            "2024",
            &["n8n", "LLMs", "Google Sheets"],
            None,
            None,
            "assets/images/projects/telegram-leads.jpg",
            false,
        ),
        project(
            "enterprise-workflows",
            "Custom Enterprise Workflow Automations",
            "أتمتة سير عمل مخصصة للمؤسسات",
            "Enterprise · BPA",
            "2024",
            &["n8n", "Python", "Webhooks", "REST APIs"],
            None,
            None,
            "assets/images/projects/enterprise.jpg",
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    tagline: &str,
    category: &str,
    year: &str,
    technologies: &[&str],
    demo_link: Option<&str>,
    link: Option<&str>,
    image: &str,
    has_chat: bool,
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        tagline: tagline.to_string(),
        category: category.to_string(),
        year: year.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        demo_link: demo_link.map(String::from),
        link: link.map(String::from),
        image: image.to_string(),
        has_chat,
    }
}
