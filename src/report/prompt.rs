use crate::panel::BiomarkerPanel;

/// Instructions sent ahead of the patient data. The section layout here is
/// load-bearing: the parser locates exactly these `###` headers and the
/// bold-label / numbered-list / pipe-table shapes requested below.
pub const REPORT_PROMPT_TEMPLATE: &str = r#"
You are an advanced medical insight generation assistant trained to analyze
biomarkers and lab results.

IMPORTANT OUTPUT FORMAT INSTRUCTIONS:
Return your report in this strict markdown structure.

### Executive Summary
**Top Health Priorities:**
1. ...
2. ...
3. ...
**Key Strengths:**
- ...
- ...

### System-Specific Analysis
One entry per tested system, as a bold label followed by its assessment:
**Kidney Function Test**
Status: ... Explanation: cover urea, creatinine, eGFR, uric acid,
electrolytes, bicarbonate, osmolality, amylase, and lipase.
**Basic Check-up (CBC & Hematology)**
Status: ... Explanation: cover hemoglobin, MCV, RDW, WBC, and lymphocytes.
**Diabetic Profile**
Status: ... Explanation: cover fasting glucose, HbA1c, insulin, C-peptide,
and HOMA-IR.
**Lipid Profile**
Status: ... Explanation: cover total cholesterol, LDL, HDL, triglycerides,
Apo A-1, Apo B, and the derived ratios.
**Liver Function Test**
Status: ... Explanation: cover ALT, AST, ALP, GGT, LDH, bilirubin fractions,
albumin, globulin, total protein, and ammonia.
**Cardiac Profile**
Status: ... Explanation: cover hs-CRP, CK, CK-MB, and homocysteine.
**Mineral & Heavy Metal**
Status: ... Explanation: cover zinc, copper, selenium, and magnesium.
**Iron Profile**
Status: ... Explanation: cover iron, TIBC, and transferrin.
**Vitamins**
Status: ... Explanation: cover vitamin D and vitamin B12.
**Hormone Profile**
Status: ... Explanation: cover testosterone, estradiol, progesterone,
DHEA-S, SHBG, LH, and FSH.
**Thyroid Profile**
Status: ... Explanation: cover TSH, free and total T3/T4, reverse T3, and
thyroid antibodies.
**Adrenal Function / Stress Hormones**
Status: ... Explanation: cover cortisol, ACTH, IGF-1, leptin, and
adiponectin.
**Blood Marker Cancer Profile**
Status: ... Explanation: cover the tumor markers provided (note: tumor
markers are not screening tools and must be interpreted in clinical
context).
**Immune Profile**
Status: ... Explanation: cover immunoglobulins, autoantibodies, IL-6, and
the allergy panel.

### Personalized Action Plan
**Nutrition:**
detailed guidance
**Lifestyle:**
detailed guidance
**Testing:**
detailed guidance
**Medical Consultation:**
detailed guidance

### Interaction Alerts
- ...
- ...

### Normal Ranges
One line per biomarker discussed, formatted exactly as:
- <biomarker>: <reference range>

### Tabular Mapping
A markdown table with exactly these five columns:
| Biomarker | Value | Status | Insight | Reference Range |
"#;

/// Assemble the full prompt: format instructions plus the rendered
/// patient data.
pub fn build_report_prompt(panel: &BiomarkerPanel) -> String {
    format!(
        "{}\n\n{}",
        REPORT_PROMPT_TEMPLATE,
        render_patient_summary(panel)
    )
}

/// Render the patient's values into the grouped markdown block the model
/// receives after the instructions.
pub fn render_patient_summary(panel: &BiomarkerPanel) -> String {
    format!(
        "**Patient Info**\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Height: {height} cm\n\
         - Weight: {weight} kg\n\
         \n\
         **Metabolic & Glycemic Control**\n\
         - Fasting Blood Sugar: {fasting_blood_sugar} mg/dL\n\
         - HbA1c: {hb1ac} %\n\
         - Insulin: {insulin} µIU/mL\n\
         - C-Peptide: {c_peptide} ng/mL\n\
         - HOMA-IR: {homa_ir}\n\
         - Leptin: {leptin} ng/mL\n\
         \n\
         **Cardiovascular System**\n\
         - Total Cholesterol: {total_cholesterol} mg/dL\n\
         - LDL: {ldl} mg/dL\n\
         - HDL: {hdl} mg/dL\n\
         - Triglycerides: {triglycerides} mg/dL\n\
         - ApoB: {apo_b} mg/dL\n\
         - Cholesterol/HDL Ratio: {cholesterol_hdl_ratio}\n\
         - hs-CRP: {hs_crp} mg/L\n\
         - Homocysteine: {homocysteine} µmol/L\n\
         \n\
         **Liver Function**\n\
         - ALT: {alt} U/L\n\
         - AST: {ast} U/L\n\
         - GGT: {ggt} U/L\n\
         - Total Bilirubin: {total_bilirubin} mg/dL\n\
         - Total Protein: {total_protein} g/dL\n\
         \n\
         **Renal Function**\n\
         - Creatinine: {creatinine} mg/dL\n\
         - eGFR: {egfr} mL/min/1.73m2\n\
         - Uric Acid: {uric_acid} mg/dL\n\
         \n\
         **Vitamins & Minerals**\n\
         - Vitamin D: {vitamin_d} ng/mL\n\
         - Vitamin B12: {vitamin_b12} pg/mL\n\
         - Iron: {iron} µg/dL\n\
         - Zinc: {zinc} µg/dL\n\
         \n\
         **Thyroid Function**\n\
         - TSH: {tsh} µIU/mL\n\
         - Free T3: {free_t3} pg/mL\n\
         - Free T4: {free_t4} ng/dL\n\
         \n\
         **Sex Hormones & Reproductive Health**\n\
         - Total Testosterone: {total_testosterone} ng/dL\n\
         - Free Testosterone: {free_testosterone} pg/mL\n\
         - Estrogen (Estradiol): {estrogen} pg/mL\n\
         - SHBG: {shbg} nmol/L\n\
         \n\
         **Adrenal & Stress Hormones**\n\
         - Cortisol: {cortisol} µg/dL\n\
         - DHEA-S: {dhea_s} µg/dL\n\
         \n\
         **Autoimmune / Inflammatory Markers**\n\
         - Anti-CCP: {anti_ccp} U/mL\n",
        age = panel.age,
        gender = panel.gender,
        height = panel.height,
        weight = panel.weight,
        fasting_blood_sugar = panel.fasting_blood_sugar,
        hb1ac = panel.hb1ac,
        insulin = panel.insulin,
        c_peptide = panel.c_peptide,
        homa_ir = panel.homa_ir,
        leptin = panel.leptin,
        total_cholesterol = panel.total_cholesterol,
        ldl = panel.ldl,
        hdl = panel.hdl,
        triglycerides = panel.triglycerides,
        apo_b = panel.apo_b,
        cholesterol_hdl_ratio = panel.cholesterol_hdl_ratio,
        hs_crp = panel.hs_crp,
        homocysteine = panel.homocysteine,
        alt = panel.alt,
        ast = panel.ast,
        ggt = panel.ggt,
        total_bilirubin = panel.total_bilirubin,
        total_protein = panel.total_protein,
        creatinine = panel.creatinine,
        egfr = panel.egfr,
        uric_acid = panel.uric_acid,
        vitamin_d = panel.vitamin_d,
        vitamin_b12 = panel.vitamin_b12,
        iron = panel.iron,
        zinc = panel.zinc,
        tsh = panel.tsh,
        free_t3 = panel.free_t3,
        free_t4 = panel.free_t4,
        total_testosterone = panel.total_testosterone,
        free_testosterone = panel.free_testosterone,
        estrogen = panel.estrogen,
        shbg = panel.shbg,
        cortisol = panel.cortisol,
        dhea_s = panel.dhea_s,
        anti_ccp = panel.anti_ccp,
    )
}
