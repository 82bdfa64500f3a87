// All LLM prompt constants for the matching module.

/// Resume detail-extraction prompt template. Replace `{resume_text}` before sending.
pub const EXTRACT_DETAILS_PROMPT_TEMPLATE: &str = r#"You are a highly accurate resume parsing engine. Your task is to meticulously extract contact and profile information from the provided resume text.
You MUST return the information in a single, valid JSON object. Do not include any text, explanations, or markdown fences like ```json around the output.

The required JSON schema is:
{
  "name": "string | null",
  "email": "string | null",
  "phone": "string | null",
  "linkedin_url": "string | null",
  "github_url": "string | null",
  "address": "string | null"
}

Extraction Rules:
1. Name: The candidate's full name is almost always one of the first lines at the very top of the resume. It should not contain numbers or special characters besides hyphens or apostrophes.
2. Email: Find the primary email address.
3. Phone: Find the main phone number.
4. LinkedIn/GitHub: Find the full URLs to their profiles. If you find a username, construct the full URL (e.g., /in/johndoe -> https://www.linkedin.com/in/johndoe).
5. Address: Extract the full mailing address (street, city, state, zip).
6. Null Values: If any field cannot be found, its value in the JSON object MUST be null.

Resume Text:
---
{resume_text}
---"#;

/// Scoring prompt template. Replace `{custom_keywords_section}`, `{jd_text}`,
/// and `{resume_text}` before sending. The rubric is deliberately strict so
/// scores stay comparable across resumes in a batch.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"You are an expert technical recruiter providing a standardized, objective analysis. Your task is to score the provided resume against the given job description and optional keywords.
You MUST return your analysis as a single, valid JSON object with two keys: "score" (a number from 0 to 100) and "justification" (a brief, one-sentence string explaining the score).
Do not include any text, explanations, or markdown fences like ```json around the output.

Scoring Rubric (Be strict and consistent):
- 90-100: Excellent fit. The resume strongly aligns with all or nearly all key requirements, skills, and experience levels mentioned in the job description.
- 70-89: Strong candidate. The resume aligns with most of the key requirements, with only minor gaps in skills or experience.
- 50-69: Potential fit. The resume shows some alignment but is missing several key requirements or the experience level is significantly lower than requested.
- 0-49: Not a good fit. The resume has significant gaps and does not align with the core requirements of the role.

Analyze the resume's experience, skills, and qualifications against the criteria below.
{custom_keywords_section}
Job Description:
---
{jd_text}
---

Resume:
---
{resume_text}
---"#;

/// Inserted into `MATCH_PROMPT_TEMPLATE` only when the user supplied custom
/// keywords. Replace `{custom_keywords}` before sending.
pub const CUSTOM_KEYWORDS_SECTION_TEMPLATE: &str = r#"
In addition to the job description, give special consideration to these keywords when evaluating the resume. They may represent important soft skills or specific requirements:
---
{custom_keywords}
---
"#;
