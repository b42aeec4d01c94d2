//! Improvement prompt assembly.
//!
//! The prompt is a pure function of (resume text, job description, focus):
//! preamble, delimited resume, optional delimited job description with
//! keyword-extraction instructions, one focus block, closing instructions.

use std::fmt;

pub const RESUME_START: &str = "===== ORIGINAL RESUME =====";
pub const RESUME_END: &str = "===== END OF ORIGINAL RESUME =====";
pub const JOB_DESCRIPTION_START: &str = "===== TARGET JOB DESCRIPTION =====";
pub const JOB_DESCRIPTION_END: &str = "===== END OF JOB DESCRIPTION =====";

const PREAMBLE: &str = "\
You are an expert resume writer and career coach. Analyze and improve the following resume for ATS compatibility and professional impact.

Your expertise includes:
- ATS (Applicant Tracking System) optimization
- Action verb selection and impact statement creation
- Quantifying achievements effectively
- Industry-specific terminology and best practices
- Modern resume formatting and structure
";

const JOB_DESCRIPTION_INSTRUCTIONS: &str = "\
IMPORTANT: Carefully analyze the job description and identify:
1. Key required skills and qualifications
2. Important keywords and phrases that should appear in the resume
3. Specific responsibilities mentioned
4. Technical tools or technologies required

Tailor the resume to highlight experiences and skills that match these requirements.
";

const GENERAL_FOCUS: &str = r#"
===== IMPROVEMENT FOCUS: GENERAL ENHANCEMENT =====

Apply these improvements to the resume:

1. IMPACT & CLARITY:
   - Transform weak bullet points into strong impact statements
   - Start each bullet with powerful action verbs (Led, Developed, Implemented, Achieved, etc.)
   - Remove passive voice and make statements direct and confident

2. QUANTIFICATION:
   - Add numbers, percentages, and metrics wherever possible
   - Examples: "Increased revenue by 30%", "Managed team of 8 developers", "Reduced costs by $50K annually"

3. STRUCTURE & FORMATTING:
   - Ensure consistent formatting throughout
   - Use standard section headers (Experience, Education, Skills, etc.)
   - Keep bullet points concise (1-2 lines maximum)

4. ATS OPTIMIZATION:
   - Remove special characters and complex formatting
   - Use standard fonts and simple structure
   - Include relevant keywords naturally
   - Avoid tables, text boxes, and headers/footers

5. PROFESSIONAL LANGUAGE:
   - Remove clichés and buzzwords ("team player", "hard worker", etc.)
   - Use industry-specific terminology
   - Maintain professional tone throughout
"#;

const TECHNICAL_FOCUS: &str = r#"
===== IMPROVEMENT FOCUS: TECHNICAL SKILLS EMPHASIS =====

Optimize this resume for technical roles:

1. TECHNICAL SKILLS SHOWCASE:
   - Create a prominent Technical Skills section with categories
   - List programming languages, frameworks, tools, and technologies
   - Use correct version numbers and spellings (React.js, Node.js, Python 3.x)

2. PROJECT HIGHLIGHTS:
   - Emphasize technical projects and their impact
   - Include tech stack used for each project
   - Mention scale (users served, data processed, performance metrics)

3. TECHNICAL ACHIEVEMENTS:
   - Highlight system improvements, optimizations, and innovations
   - Quantify technical impact (e.g., "Reduced API response time by 60%")
   - Mention architecture decisions and their rationale

4. PROBLEM-SOLVING:
   - Showcase debugging, troubleshooting, and optimization skills
   - Highlight complex technical challenges overcome
   - Mention algorithmic improvements or efficiency gains

5. TECHNICAL KEYWORDS:
   - Include relevant technical keywords from the job description
   - Use industry-standard terminology
   - Mention methodologies (Agile, Scrum, CI/CD, TDD)
"#;

const LEADERSHIP_FOCUS: &str = r#"
===== IMPROVEMENT FOCUS: LEADERSHIP & MANAGEMENT =====

Enhance leadership and management aspects:

1. LEADERSHIP SCOPE:
   - Clearly state team sizes managed (e.g., "Led team of 12 engineers")
   - Mention budget responsibilities if applicable
   - Highlight cross-functional collaboration and stakeholder management

2. STRATEGIC IMPACT:
   - Emphasize strategic decisions and their business impact
   - Show how your leadership drove company/team success
   - Include metrics on team performance improvements

3. PEOPLE DEVELOPMENT:
   - Highlight mentoring and coaching experiences
   - Mention hiring, onboarding, and training responsibilities
   - Show career advancement of team members you mentored

4. PROJECT/PROGRAM MANAGEMENT:
   - Emphasize end-to-end project ownership
   - Show successful delivery of complex initiatives
   - Quantify project scope, timeline, and budget

5. COMMUNICATION & INFLUENCE:
   - Highlight presentations to leadership or external stakeholders
   - Show conflict resolution and negotiation skills
   - Mention change management and organizational improvements
"#;

const ATS_FOCUS: &str = r#"
===== IMPROVEMENT FOCUS: ATS (APPLICANT TRACKING SYSTEM) OPTIMIZATION =====

Optimize this resume to pass ATS screening:

1. KEYWORD OPTIMIZATION:
   - Extract keywords from the job description
   - Naturally incorporate these keywords throughout the resume
   - Use exact phrases from job posting when appropriate
   - Include both acronyms and full terms (e.g., "API" and "Application Programming Interface")

2. STANDARD FORMATTING:
   - Use simple, clean formatting with no tables or columns
   - Stick to standard section headings (Work Experience, Education, Skills)
   - Use standard bullet points (•) not custom symbols
   - Avoid headers, footers, text boxes, and images

3. FILE FORMAT COMPATIBILITY:
   - Ensure resume works as plain text
   - Use standard fonts (Arial, Calibri, Times New Roman)
   - Avoid special characters and symbols

4. SECTION ORGANIZATION:
   - Place most relevant sections first
   - Use clear, standard section names
   - Ensure dates are in consistent format (MM/YYYY)

5. SKILLS SECTION:
   - Create a dedicated skills section with categorized skills
   - List skills exactly as they appear in job descriptions
   - Include both soft and technical skills relevant to the role
"#;

const CLOSING_INSTRUCTIONS: &str = "

===== INSTRUCTIONS =====
1. Provide an improved version of the resume
2. Maintain all factual information (do not invent experience or skills)
3. Improve language, presentation, and impact
4. Make it more professional and compelling
5. Ensure it's ATS-friendly

OUTPUT FORMAT: Return ONLY the improved resume text, no additional commentary or explanations.
";

/// What the improvement should emphasize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImprovementFocus {
    #[default]
    General,
    Technical,
    Leadership,
    Ats,
}

impl ImprovementFocus {
    /// Parses a focus label. Matching is exact; anything else falls back to `General`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "technical" => ImprovementFocus::Technical,
            "leadership" => ImprovementFocus::Leadership,
            "ats" => ImprovementFocus::Ats,
            _ => ImprovementFocus::General,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImprovementFocus::General => "general",
            ImprovementFocus::Technical => "technical",
            ImprovementFocus::Leadership => "leadership",
            ImprovementFocus::Ats => "ats",
        }
    }

    fn instructions(self) -> &'static str {
        match self {
            ImprovementFocus::General => GENERAL_FOCUS,
            ImprovementFocus::Technical => TECHNICAL_FOCUS,
            ImprovementFocus::Leadership => LEADERSHIP_FOCUS,
            ImprovementFocus::Ats => ATS_FOCUS,
        }
    }
}

impl From<Option<&str>> for ImprovementFocus {
    fn from(label: Option<&str>) -> Self {
        label.map(Self::from_label).unwrap_or_default()
    }
}

impl fmt::Display for ImprovementFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the improvement prompt. An empty job description is treated as absent.
pub fn build_improvement_prompt(
    resume_text: &str,
    job_description: Option<&str>,
    focus: ImprovementFocus,
) -> String {
    let mut prompt = String::with_capacity(resume_text.len() + 4096);

    prompt.push_str(PREAMBLE);
    prompt.push('\n');
    prompt.push_str(RESUME_START);
    prompt.push('\n');
    prompt.push_str(resume_text);
    prompt.push('\n');
    prompt.push_str(RESUME_END);
    prompt.push('\n');

    if let Some(job_description) = job_description.filter(|jd| !jd.is_empty()) {
        prompt.push('\n');
        prompt.push_str(JOB_DESCRIPTION_START);
        prompt.push('\n');
        prompt.push_str(job_description);
        prompt.push('\n');
        prompt.push_str(JOB_DESCRIPTION_END);
        prompt.push_str("\n\n");
        prompt.push_str(JOB_DESCRIPTION_INSTRUCTIONS);
    }

    prompt.push_str(focus.instructions());
    prompt.push_str(CLOSING_INSTRUCTIONS);

    prompt
}
