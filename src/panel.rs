//! Biomarker panel input schema.
//!
//! One field per lab value, grouped by panel. Every field is optional on
//! the wire: a missing field falls back to the reference default below, so
//! an empty JSON object is a valid request. No medical plausibility
//! checks are applied; values are forwarded to the model as given.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomarkerPanel {
    // ── Patient info ────────────────────────────────────────────────
    /// Age in years
    pub age: u32,
    pub gender: String,
    /// Height in cm
    pub height: f64,
    /// Weight in kg
    pub weight: f64,

    // ── Kidney function ─────────────────────────────────────────────
    /// Urea (S) in mg/dL
    pub urea: f64,
    /// Creatinine (S) in mg/dL
    pub creatinine: f64,
    /// Uric Acid (S) in mg/dL
    pub uric_acid: f64,
    /// Calcium (S) in mg/dL
    pub calcium: f64,
    /// Phosphorus (S) in mg/dL
    pub phosphorus: f64,
    /// Sodium (S) in mEq/L
    pub sodium: f64,
    /// Potassium (S) in mEq/L
    pub potassium: f64,
    /// Chloride (S) in mEq/L
    pub chloride: f64,
    /// Amylase (S) in U/L
    pub amylase: f64,
    /// Lipase (S) in U/L
    pub lipase: f64,
    /// Bicarbonate (S) in mEq/L
    pub bicarbonate: f64,
    /// Estimated GFR in mL/min/1.73m²
    pub egfr: f64,
    /// Serum Osmolality in mOsm/kg
    pub serum_osmolality: f64,
    /// Ionized Calcium in mmol/L
    pub ionized_calcium: f64,

    // ── Basic check-up (CBC) ────────────────────────────────────────
    /// White blood cell count (×10³/µL)
    pub wbc: f64,
    /// Hemoglobin (g/dL)
    pub hemoglobin: f64,
    /// Mean corpuscular volume (fL)
    pub mcv: f64,
    /// Red cell distribution width (%)
    pub rdw: f64,
    /// Lymphocyte percentage (%)
    pub lymphocytes: f64,

    // ── Diabetic profile ────────────────────────────────────────────
    /// Fasting blood sugar (mg/dL)
    pub fasting_blood_sugar: f64,
    /// HbA1c (%)
    pub hb1ac: f64,
    /// Insulin (µIU/mL)
    pub insulin: f64,
    /// C-Peptide (ng/mL)
    pub c_peptide: f64,
    pub homa_ir: f64,

    // ── Lipid profile ───────────────────────────────────────────────
    /// Total cholesterol (mg/dL)
    pub total_cholesterol: f64,
    /// LDL cholesterol (mg/dL)
    pub ldl: f64,
    /// HDL direct (mg/dL)
    pub hdl: f64,
    pub cholesterol_hdl_ratio: f64,
    /// Triglycerides (mg/dL)
    pub triglycerides: f64,
    /// Apo A-1 (mg/dL)
    pub apo_a1: f64,
    /// Apo B (mg/dL)
    pub apo_b: f64,
    /// Apo B : Apo A-1 ratio
    pub apo_ratio: f64,

    // ── Liver function ──────────────────────────────────────────────
    /// Albumin (g/dL)
    pub albumin: f64,
    /// Total protein (g/dL)
    pub total_protein: f64,
    /// ALT (U/L)
    pub alt: f64,
    /// AST (U/L)
    pub ast: f64,
    /// ALP (U/L)
    pub alp: f64,
    /// GGT (U/L)
    pub ggt: f64,
    /// LDH (U/L)
    pub ld: f64,
    /// Globulin (g/dL)
    pub globulin: f64,
    pub albumin_globulin_ratio: f64,
    /// Magnesium (mg/dL)
    pub magnesium: f64,
    /// Total bilirubin (mg/dL)
    pub total_bilirubin: f64,
    /// Direct bilirubin (mg/dL)
    pub direct_bilirubin: f64,
    /// Indirect bilirubin (mg/dL)
    pub indirect_bilirubin: f64,
    /// Ammonia (µmol/L)
    pub ammonia: f64,

    // ── Cardiac profile ─────────────────────────────────────────────
    /// High-sensitivity CRP (mg/L)
    pub hs_crp: f64,
    /// Creatine kinase (U/L)
    pub ck: f64,
    /// CK-MB (U/L)
    pub ck_mb: f64,
    /// Homocysteine (µmol/L)
    pub homocysteine: f64,

    // ── Minerals & heavy metals ─────────────────────────────────────
    /// Zinc (µg/dL)
    pub zinc: f64,
    /// Copper (µg/dL)
    pub copper: f64,
    /// Selenium (µg/L)
    pub selenium: f64,

    // ── Iron profile ────────────────────────────────────────────────
    /// Iron (µg/dL)
    pub iron: f64,
    /// TIBC (µg/dL)
    pub tibc: f64,
    /// Transferrin (mg/dL)
    pub transferrin: f64,

    // ── Vitamins ────────────────────────────────────────────────────
    /// Vitamin D (ng/mL)
    pub vitamin_d: f64,
    /// Vitamin B12 (pg/mL)
    pub vitamin_b12: f64,

    // ── Hormone profile ─────────────────────────────────────────────
    /// Total testosterone (ng/dL)
    pub total_testosterone: f64,
    /// Free testosterone (pg/mL)
    pub free_testosterone: f64,
    /// Estradiol (pg/mL)
    pub estrogen: f64,
    /// Progesterone (ng/mL)
    pub progesterone: f64,
    /// DHEA-S (µg/dL)
    pub dhea_s: f64,
    /// SHBG (nmol/L)
    pub shbg: f64,
    /// LH (IU/L)
    pub lh: f64,
    /// FSH (IU/L)
    pub fsh: f64,

    // ── Thyroid profile ─────────────────────────────────────────────
    /// TSH (µIU/mL)
    pub tsh: f64,
    /// Free T3 (pg/mL)
    pub free_t3: f64,
    /// Free T4 (ng/dL)
    pub free_t4: f64,
    /// Total T3 (ng/dL)
    pub total_t3: f64,
    /// Total T4 (µg/dL)
    pub total_t4: f64,
    /// Reverse T3 (ng/dL)
    pub reverse_t3: f64,
    /// TPO antibodies (IU/mL)
    pub tpo_ab: f64,
    /// Thyroglobulin antibodies (IU/mL)
    pub tg_ab: f64,

    // ── Adrenal / stress / other hormones ───────────────────────────
    /// Cortisol (µg/dL)
    pub cortisol: f64,
    /// ACTH (pg/mL)
    pub acth: f64,
    /// IGF-1 (ng/mL)
    pub igf1: f64,
    /// Leptin (ng/mL)
    pub leptin: f64,
    /// Adiponectin (µg/mL)
    pub adiponectin: f64,

    // ── Tumor markers ───────────────────────────────────────────────
    /// CA125 (U/mL)
    pub ca125: f64,
    /// CA15-3 (U/mL)
    pub ca15_3: f64,
    /// CA19-9 (U/mL)
    pub ca19_9: f64,
    /// PSA (ng/mL)
    pub psa: f64,
    /// CEA (ng/mL)
    pub cea: f64,
    /// Calcitonin (pg/mL)
    pub calcitonin: f64,
    /// AFP (ng/mL)
    pub afp: f64,
    /// Tumor necrosis factor (pg/mL)
    pub tnf: f64,

    // ── Immune profile ──────────────────────────────────────────────
    /// ANA (IU/mL)
    pub ana: f64,
    /// IgE (IU/mL)
    pub ige: f64,
    /// IgG (mg/dL)
    pub igg: f64,
    /// Anti-CCP (U/mL)
    pub anti_ccp: f64,
    /// dsDNA (IU/mL)
    pub dsdna: f64,
    /// SSA/SSB (IU/mL)
    pub ssa_ssb: f64,
    /// RNP (IU/mL)
    pub rnp: f64,
    /// Sm antibodies (IU/mL)
    pub sm_antibodies: f64,
    /// ANCA (IU/mL)
    pub anca: f64,
    /// Anti-ENA (IU/mL)
    pub anti_ena: f64,
    /// IL-6 (pg/mL)
    pub il6: f64,
    /// Comprehensive allergy profile (IgE & food sensitivity IgG)
    pub allergy_panel: f64,
}

impl Default for BiomarkerPanel {
    fn default() -> Self {
        Self {
            age: 52,
            gender: "female".to_string(),
            height: 165.0,
            weight: 70.0,

            urea: 30.0,
            creatinine: 1.0,
            uric_acid: 5.0,
            calcium: 9.5,
            phosphorus: 3.5,
            sodium: 140.0,
            potassium: 4.2,
            chloride: 102.0,
            amylase: 70.0,
            lipase: 35.0,
            bicarbonate: 24.0,
            egfr: 100.0,
            serum_osmolality: 290.0,
            ionized_calcium: 1.25,

            wbc: 6.0,
            hemoglobin: 14.0,
            mcv: 90.0,
            rdw: 13.5,
            lymphocytes: 30.0,

            fasting_blood_sugar: 85.0,
            hb1ac: 5.4,
            insulin: 10.0,
            c_peptide: 1.2,
            homa_ir: 1.2,

            total_cholesterol: 180.0,
            ldl: 90.0,
            hdl: 50.0,
            cholesterol_hdl_ratio: 3.0,
            triglycerides: 120.0,
            apo_a1: 140.0,
            apo_b: 70.0,
            apo_ratio: 0.5,

            albumin: 4.2,
            total_protein: 7.0,
            alt: 25.0,
            ast: 24.0,
            alp: 120.0,
            ggt: 20.0,
            ld: 180.0,
            globulin: 3.0,
            albumin_globulin_ratio: 1.4,
            magnesium: 2.0,
            total_bilirubin: 0.7,
            direct_bilirubin: 0.3,
            indirect_bilirubin: 0.4,
            ammonia: 35.0,

            hs_crp: 1.0,
            ck: 150.0,
            ck_mb: 20.0,
            homocysteine: 10.0,

            zinc: 90.0,
            copper: 100.0,
            selenium: 120.0,

            iron: 100.0,
            tibc: 300.0,
            transferrin: 250.0,

            vitamin_d: 35.0,
            vitamin_b12: 500.0,

            total_testosterone: 450.0,
            free_testosterone: 15.0,
            estrogen: 60.0,
            progesterone: 1.0,
            dhea_s: 250.0,
            shbg: 40.0,
            lh: 5.0,
            fsh: 6.0,

            tsh: 2.0,
            free_t3: 3.2,
            free_t4: 1.2,
            total_t3: 120.0,
            total_t4: 8.0,
            reverse_t3: 15.0,
            tpo_ab: 5.0,
            tg_ab: 3.0,

            cortisol: 12.0,
            acth: 25.0,
            igf1: 200.0,
            leptin: 10.0,
            adiponectin: 10.0,

            ca125: 20.0,
            ca15_3: 25.0,
            ca19_9: 30.0,
            psa: 1.0,
            cea: 2.0,
            calcitonin: 5.0,
            afp: 5.0,
            tnf: 2.0,

            ana: 0.5,
            ige: 100.0,
            igg: 1200.0,
            anti_ccp: 10.0,
            dsdna: 0.5,
            ssa_ssb: 5.0,
            rnp: 1.0,
            sm_antibodies: 0.5,
            anca: 0.5,
            anti_ena: 0.5,
            il6: 3.0,
            allergy_panel: 10.0,
        }
    }
}
