// LLM prompt constants for JD attribute extraction.

/// System prompt for JD attribute extraction — enforces JSON-only output.
pub const JD_EXTRACT_SYSTEM: &str =
    "You are an expert technical recruiter analyzing job descriptions. \
    Extract the attributes needed to search for matching candidates. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// JD extraction prompt template. Replace `{jd_text}` before sending.
pub const JD_EXTRACT_PROMPT_TEMPLATE: &str = r#"Analyze the following job description and extract candidate search attributes.

Return a JSON object with this EXACT schema (every key present, no extra fields):
{
  "title": "Senior Backend Developer",
  "minimum_degree": "Bachelor",
  "location": "San Francisco, CA",
  "required_skills": ["python", "django", "postgresql"],
  "experience_years": 5,
  "search_keywords": ["Backend Developer", "Python Engineer"],
  "work_authorization": "US work authorization required"
}

Rules for extraction:

TITLE: the job title as posted. Empty string if none is stated.

MINIMUM_DEGREE: exactly one of "None", "Diploma", "Bachelor", "Master", "PhD".
Use "None" when no degree is required or none is mentioned.

LOCATION: city/region as stated, or "Remote". Empty string if unstated.

REQUIRED_SKILLS: explicit must-have technologies and skills, lowercased,
most important first. Exclude nice-to-haves.

EXPERIENCE_YEARS: minimum years of experience required, as an integer.
Use 0 when unstated.

SEARCH_KEYWORDS: 2-5 role phrases a candidate with this job would list as
their own title (e.g. alternate titles, adjacent roles). These are used
verbatim as search queries, so keep them short.

WORK_AUTHORIZATION: visa/work-right constraints as stated. Empty string if
unstated.

JOB DESCRIPTION:
{jd_text}"#;
