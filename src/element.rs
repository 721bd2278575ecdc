use phf::phf_map;

/// Periodic table data for elements 1–118.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He = 2,
    Li = 3,
    Be = 4,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Ne = 10,
    Na = 11,
    Mg = 12,
    Al = 13,
    Si = 14,
    P = 15,
    S = 16,
    Cl = 17,
    Ar = 18,
    K = 19,
    Ca = 20,
    Sc = 21,
    Ti = 22,
    V = 23,
    Cr = 24,
    Mn = 25,
    Fe = 26,
    Co = 27,
    Ni = 28,
    Cu = 29,
    Zn = 30,
    Ga = 31,
    Ge = 32,
    As = 33,
    Se = 34,
    Br = 35,
    Kr = 36,
    Rb = 37,
    Sr = 38,
    Y = 39,
    Zr = 40,
    Nb = 41,
    Mo = 42,
    Tc = 43,
    Ru = 44,
    Rh = 45,
    Pd = 46,
    Ag = 47,
    Cd = 48,
    In = 49,
    Sn = 50,
    Sb = 51,
    Te = 52,
    I = 53,
    Xe = 54,
    Cs = 55,
    Ba = 56,
    La = 57,
    Ce = 58,
    Pr = 59,
    Nd = 60,
    Pm = 61,
    Sm = 62,
    Eu = 63,
    Gd = 64,
    Tb = 65,
    Dy = 66,
    Ho = 67,
    Er = 68,
    Tm = 69,
    Yb = 70,
    Lu = 71,
    Hf = 72,
    Ta = 73,
    W = 74,
    Re = 75,
    Os = 76,
    Ir = 77,
    Pt = 78,
    Au = 79,
    Hg = 80,
    Tl = 81,
    Pb = 82,
    Bi = 83,
    Po = 84,
    At = 85,
    Rn = 86,
    Fr = 87,
    Ra = 88,
    Ac = 89,
    Th = 90,
    Pa = 91,
    U = 92,
    Np = 93,
    Pu = 94,
    Am = 95,
    Cm = 96,
    Bk = 97,
    Cf = 98,
    Es = 99,
    Fm = 100,
    Md = 101,
    No = 102,
    Lr = 103,
    Rf = 104,
    Db = 105,
    Sg = 106,
    Bh = 107,
    Hs = 108,
    Mt = 109,
    Ds = 110,
    Rg = 111,
    Cn = 112,
    Nh = 113,
    Fl = 114,
    Mc = 115,
    Lv = 116,
    Ts = 117,
    Og = 118,
}

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        if (1..=118).contains(&n) {
            // SAFETY: Element is repr(u8) with variants 1..=118, and we checked bounds.
            Some(unsafe { std::mem::transmute::<u8, Element>(n) })
        } else {
            None
        }
    }

    /// Exact, case-sensitive symbol lookup ("Fe", "O", "Cl").
    pub fn from_symbol(s: &str) -> Option<Element> {
        BY_SYMBOL.get(s).copied()
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        SYMBOLS[self as usize - 1]
    }

    pub fn name(self) -> &'static str {
        NAMES[self as usize - 1]
    }

    /// IUPAC CIAAW standard atomic weight in daltons. Radioactive elements
    /// without stable isotopes use the mass number of the longest-lived
    /// isotope.
    pub fn atomic_weight(self) -> f64 {
        ATOMIC_WEIGHTS[self as usize - 1]
    }

    /// Pauling electronegativity, `None` where no reliable value exists.
    pub fn electronegativity(self) -> Option<f64> {
        let v = ELECTRONEGATIVITIES[self as usize - 1];
        if v < 0.0 { None } else { Some(v) }
    }

    /// Common oxidation states in compounds, ordered by how frequently the
    /// state occurs (first entry = most common). An empty slice means the
    /// element has no conventional compound chemistry (light noble gases,
    /// most superheavies).
    pub fn oxidation_states(self) -> &'static [i8] {
        match self {
            Element::H => &[1, -1],
            Element::Li | Element::Na | Element::K | Element::Rb | Element::Cs | Element::Fr => {
                &[1]
            }
            Element::Be | Element::Mg | Element::Ca | Element::Sr | Element::Ba | Element::Ra => {
                &[2]
            }
            Element::B => &[3],
            Element::C => &[4, -4, 2],
            Element::N => &[-3, 5, 3, 4, 2, 1, -1, -2],
            Element::O => &[-2, -1, 2],
            Element::F => &[-1],
            Element::Al => &[3],
            Element::Si => &[4, -4],
            Element::P => &[5, 3, -3],
            Element::S => &[-2, 6, 4, 2],
            Element::Cl => &[-1, 7, 5, 3, 1],
            Element::Br => &[-1, 5, 7, 3, 1],
            Element::I => &[-1, 5, 7, 1, 3],
            Element::Sc => &[3],
            Element::Ti => &[4, 3, 2],
            Element::V => &[5, 4, 3, 2],
            Element::Cr => &[3, 6, 2],
            Element::Mn => &[2, 7, 4, 6, 3],
            Element::Fe => &[3, 2],
            Element::Co => &[2, 3],
            Element::Ni => &[2, 3],
            Element::Cu => &[2, 1],
            Element::Zn => &[2],
            Element::Ga => &[3],
            Element::Ge => &[4, 2],
            Element::As => &[5, 3, -3],
            Element::Se => &[-2, 6, 4],
            Element::Kr => &[2],
            Element::Y => &[3],
            Element::Zr => &[4],
            Element::Nb => &[5],
            Element::Mo => &[6, 4],
            Element::Tc => &[7, 4],
            Element::Ru => &[3, 4],
            Element::Rh => &[3],
            Element::Pd => &[2, 4],
            Element::Ag => &[1],
            Element::Cd => &[2],
            Element::In => &[3],
            Element::Sn => &[4, 2],
            Element::Sb => &[3, 5, -3],
            Element::Te => &[-2, 6, 4],
            Element::Xe => &[2, 4, 6],
            Element::La
            | Element::Pr
            | Element::Nd
            | Element::Pm
            | Element::Sm
            | Element::Gd
            | Element::Tb
            | Element::Dy
            | Element::Ho
            | Element::Er
            | Element::Tm
            | Element::Lu => &[3],
            Element::Ce => &[3, 4],
            Element::Eu | Element::Yb => &[3, 2],
            Element::Hf => &[4],
            Element::Ta => &[5],
            Element::W => &[6, 4],
            Element::Re => &[7, 4],
            Element::Os => &[4, 8],
            Element::Ir => &[3, 4],
            Element::Pt => &[2, 4],
            Element::Au => &[3, 1],
            Element::Hg => &[2, 1],
            Element::Tl => &[1, 3],
            Element::Pb => &[2, 4],
            Element::Bi => &[3, 5],
            Element::Po => &[4, 2],
            Element::At => &[-1, 1],
            Element::Ac => &[3],
            Element::Th => &[4],
            Element::Pa => &[5],
            Element::U => &[6, 4],
            Element::Np => &[5],
            Element::Pu => &[4, 6],
            Element::Am
            | Element::Cm
            | Element::Bk
            | Element::Cf
            | Element::Es
            | Element::Fm
            | Element::Md
            | Element::No
            | Element::Lr => &[3],
            _ => &[],
        }
    }

    /// `Some(n)` for elements whose oxidation state is fixed by convention
    /// in essentially all compounds. Hydrogen and oxygen are deliberately
    /// absent: their defaults carry motif-level exceptions (hydrides,
    /// peroxides) that the solver resolves per formula.
    pub fn fixed_oxidation(self) -> Option<i8> {
        match self {
            Element::Li | Element::Na | Element::K | Element::Rb | Element::Cs | Element::Fr => {
                Some(1)
            }
            Element::Be | Element::Mg | Element::Ca | Element::Sr | Element::Ba | Element::Ra => {
                Some(2)
            }
            Element::F => Some(-1),
            Element::Al | Element::Sc => Some(3),
            Element::Zn | Element::Cd => Some(2),
            Element::Ag => Some(1),
            _ => None,
        }
    }

    /// Metallic elements, used by the binary hydride check. Metalloids
    /// (B, Si, Ge, As, Sb, Te) count as nonmetals here: their binary
    /// hydrogen compounds keep H at +1.
    pub fn is_metal(self) -> bool {
        !matches!(
            self,
            Element::H
                | Element::He
                | Element::B
                | Element::C
                | Element::N
                | Element::O
                | Element::F
                | Element::Ne
                | Element::Si
                | Element::P
                | Element::S
                | Element::Cl
                | Element::Ar
                | Element::Ge
                | Element::As
                | Element::Se
                | Element::Br
                | Element::Kr
                | Element::Sb
                | Element::Te
                | Element::I
                | Element::Xe
                | Element::At
                | Element::Rn
                | Element::Ts
                | Element::Og
        )
    }
}

static BY_SYMBOL: phf::Map<&'static str, Element> = phf_map! {
    "H" => Element::H, "He" => Element::He, "Li" => Element::Li, "Be" => Element::Be,
    "B" => Element::B, "C" => Element::C, "N" => Element::N, "O" => Element::O,
    "F" => Element::F, "Ne" => Element::Ne, "Na" => Element::Na, "Mg" => Element::Mg,
    "Al" => Element::Al, "Si" => Element::Si, "P" => Element::P, "S" => Element::S,
    "Cl" => Element::Cl, "Ar" => Element::Ar, "K" => Element::K, "Ca" => Element::Ca,
    "Sc" => Element::Sc, "Ti" => Element::Ti, "V" => Element::V, "Cr" => Element::Cr,
    "Mn" => Element::Mn, "Fe" => Element::Fe, "Co" => Element::Co, "Ni" => Element::Ni,
    "Cu" => Element::Cu, "Zn" => Element::Zn, "Ga" => Element::Ga, "Ge" => Element::Ge,
    "As" => Element::As, "Se" => Element::Se, "Br" => Element::Br, "Kr" => Element::Kr,
    "Rb" => Element::Rb, "Sr" => Element::Sr, "Y" => Element::Y, "Zr" => Element::Zr,
    "Nb" => Element::Nb, "Mo" => Element::Mo, "Tc" => Element::Tc, "Ru" => Element::Ru,
    "Rh" => Element::Rh, "Pd" => Element::Pd, "Ag" => Element::Ag, "Cd" => Element::Cd,
    "In" => Element::In, "Sn" => Element::Sn, "Sb" => Element::Sb, "Te" => Element::Te,
    "I" => Element::I, "Xe" => Element::Xe, "Cs" => Element::Cs, "Ba" => Element::Ba,
    "La" => Element::La, "Ce" => Element::Ce, "Pr" => Element::Pr, "Nd" => Element::Nd,
    "Pm" => Element::Pm, "Sm" => Element::Sm, "Eu" => Element::Eu, "Gd" => Element::Gd,
    "Tb" => Element::Tb, "Dy" => Element::Dy, "Ho" => Element::Ho, "Er" => Element::Er,
    "Tm" => Element::Tm, "Yb" => Element::Yb, "Lu" => Element::Lu, "Hf" => Element::Hf,
    "Ta" => Element::Ta, "W" => Element::W, "Re" => Element::Re, "Os" => Element::Os,
    "Ir" => Element::Ir, "Pt" => Element::Pt, "Au" => Element::Au, "Hg" => Element::Hg,
    "Tl" => Element::Tl, "Pb" => Element::Pb, "Bi" => Element::Bi, "Po" => Element::Po,
    "At" => Element::At, "Rn" => Element::Rn, "Fr" => Element::Fr, "Ra" => Element::Ra,
    "Ac" => Element::Ac, "Th" => Element::Th, "Pa" => Element::Pa, "U" => Element::U,
    "Np" => Element::Np, "Pu" => Element::Pu, "Am" => Element::Am, "Cm" => Element::Cm,
    "Bk" => Element::Bk, "Cf" => Element::Cf, "Es" => Element::Es, "Fm" => Element::Fm,
    "Md" => Element::Md, "No" => Element::No, "Lr" => Element::Lr, "Rf" => Element::Rf,
    "Db" => Element::Db, "Sg" => Element::Sg, "Bh" => Element::Bh, "Hs" => Element::Hs,
    "Mt" => Element::Mt, "Ds" => Element::Ds, "Rg" => Element::Rg, "Cn" => Element::Cn,
    "Nh" => Element::Nh, "Fl" => Element::Fl, "Mc" => Element::Mc, "Lv" => Element::Lv,
    "Ts" => Element::Ts, "Og" => Element::Og,
};

static SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

static NAMES: [&str; 118] = [
    "Hydrogen", "Helium", "Lithium", "Beryllium", "Boron",
    "Carbon", "Nitrogen", "Oxygen", "Fluorine", "Neon",
    "Sodium", "Magnesium", "Aluminium", "Silicon", "Phosphorus",
    "Sulfur", "Chlorine", "Argon", "Potassium", "Calcium",
    "Scandium", "Titanium", "Vanadium", "Chromium", "Manganese",
    "Iron", "Cobalt", "Nickel", "Copper", "Zinc",
    "Gallium", "Germanium", "Arsenic", "Selenium", "Bromine",
    "Krypton", "Rubidium", "Strontium", "Yttrium", "Zirconium",
    "Niobium", "Molybdenum", "Technetium", "Ruthenium", "Rhodium",
    "Palladium", "Silver", "Cadmium", "Indium", "Tin",
    "Antimony", "Tellurium", "Iodine", "Xenon", "Caesium",
    "Barium", "Lanthanum", "Cerium", "Praseodymium", "Neodymium",
    "Promethium", "Samarium", "Europium", "Gadolinium", "Terbium",
    "Dysprosium", "Holmium", "Erbium", "Thulium", "Ytterbium",
    "Lutetium", "Hafnium", "Tantalum", "Tungsten", "Rhenium",
    "Osmium", "Iridium", "Platinum", "Gold", "Mercury",
    "Thallium", "Lead", "Bismuth", "Polonium", "Astatine",
    "Radon", "Francium", "Radium", "Actinium", "Thorium",
    "Protactinium", "Uranium", "Neptunium", "Plutonium", "Americium",
    "Curium", "Berkelium", "Californium", "Einsteinium", "Fermium",
    "Mendelevium", "Nobelium", "Lawrencium", "Rutherfordium", "Dubnium",
    "Seaborgium", "Bohrium", "Hassium", "Meitnerium", "Darmstadtium",
    "Roentgenium", "Copernicium", "Nihonium", "Flerovium", "Moscovium",
    "Livermorium", "Tennessine", "Oganesson",
];

// IUPAC CIAAW 2021 standard atomic weights. Radioactive elements without
// stable isotopes carry the mass number of the longest-lived isotope.
static ATOMIC_WEIGHTS: [f64; 118] = [
    1.008, 4.002602, 6.941, 9.0121831, 10.81, 12.011, 14.007, 15.999,
    18.998403163, 20.1797, 22.98976928, 24.305, 26.9815384, 28.085,
    30.973761998, 32.06, 35.45, 39.948, 39.0983, 40.078, 44.955908,
    47.867, 50.9415, 51.9961, 54.938043, 55.845, 58.933194, 58.6934,
    63.546, 65.38, 69.723, 72.630, 74.921595, 78.971, 79.904, 83.798,
    85.4678, 87.62, 88.90584, 91.224, 92.90637, 95.95, 97.0, 101.07,
    102.90549, 106.42, 107.8682, 112.414, 114.818, 118.710, 121.760,
    127.60, 126.90447, 131.293, 132.90545196, 137.327, 138.90547,
    140.116, 140.90766, 144.242, 145.0, 150.36, 151.964, 157.25,
    158.925354, 162.500, 164.930328, 167.259, 168.934218, 173.045,
    174.9668, 178.486, 180.94788, 183.84, 186.207, 190.23, 192.217,
    195.084, 196.966570, 200.592, 204.38, 207.2, 208.98040, 209.0,
    210.0, 222.0, 223.0, 226.0, 227.0, 232.0377, 231.03588, 238.02891,
    237.0, 244.0, 243.0, 247.0, 247.0, 251.0, 252.0, 257.0, 258.0,
    259.0, 266.0, 267.0, 268.0, 269.0, 270.0, 277.0, 278.0, 281.0,
    282.0, 285.0, 286.0, 289.0, 290.0, 293.0, 294.0, 294.0,
];

// Pauling electronegativity. -1.0 = no reliable value.
static ELECTRONEGATIVITIES: [f64; 118] = [
    2.20, -1.0, 0.98, 1.57, 2.04, 2.55, 3.04, 3.44, 3.98, -1.0,
    0.93, 1.31, 1.61, 1.90, 2.19, 2.58, 3.16, -1.0, 0.82, 1.00,
    1.36, 1.54, 1.63, 1.66, 1.55, 1.83, 1.88, 1.91, 1.90, 1.65,
    1.81, 2.01, 2.18, 2.55, 2.96, 3.00, 0.82, 0.95, 1.22, 1.33,
    1.6, 2.16, 1.9, 2.2, 2.28, 2.20, 1.93, 1.69, 1.78, 1.96,
    2.05, 2.1, 2.66, 2.60, 0.79, 0.89, 1.10, 1.12, 1.13, 1.14,
    -1.0, 1.17, -1.0, 1.20, -1.0, 1.22, 1.23, 1.24, 1.25, -1.0,
    1.27, 1.3, 1.5, 2.36, 1.9, 2.2, 2.20, 2.28, 2.54, 2.00,
    1.62, 2.33, 2.02, 2.0, 2.2, -1.0, 0.7, 0.9, 1.1, 1.3,
    1.5, 1.38, 1.36, 1.28, 1.3, 1.3, 1.3, 1.3, 1.3, 1.3,
    1.3, 1.3, 1.3, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0,
    -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_atomic_num_round_trip() {
        for n in 1u8..=118 {
            let e = Element::from_atomic_num(n).unwrap();
            assert_eq!(e.atomic_num(), n);
        }
    }

    #[test]
    fn from_atomic_num_boundaries() {
        assert!(Element::from_atomic_num(0).is_none());
        assert!(Element::from_atomic_num(119).is_none());
        assert_eq!(Element::from_atomic_num(1), Some(Element::H));
        assert_eq!(Element::from_atomic_num(118), Some(Element::Og));
    }

    #[test]
    fn from_symbol_exact_match() {
        assert_eq!(Element::from_symbol("He"), Some(Element::He));
        assert_eq!(Element::from_symbol("Fe"), Some(Element::Fe));
        assert_eq!(Element::from_symbol("Og"), Some(Element::Og));
    }

    #[test]
    fn from_symbol_case_sensitive() {
        assert!(Element::from_symbol("he").is_none());
        assert!(Element::from_symbol("HE").is_none());
        assert!(Element::from_symbol("").is_none());
        assert!(Element::from_symbol("Xx").is_none());
    }

    #[test]
    fn symbol_round_trip() {
        for n in 1u8..=118 {
            let e = Element::from_atomic_num(n).unwrap();
            assert_eq!(Element::from_symbol(e.symbol()), Some(e));
        }
    }

    #[test]
    fn names_spot_check() {
        assert_eq!(Element::H.name(), "Hydrogen");
        assert_eq!(Element::Fe.name(), "Iron");
        assert_eq!(Element::Au.name(), "Gold");
        assert_eq!(Element::Og.name(), "Oganesson");
    }

    #[test]
    fn all_names_unique() {
        use std::collections::HashSet;
        let names: HashSet<&str> = (1u8..=118)
            .map(|n| Element::from_atomic_num(n).unwrap().name())
            .collect();
        assert_eq!(names.len(), 118);
    }

    #[test]
    fn electronegativity_available() {
        assert!((Element::F.electronegativity().unwrap() - 3.98).abs() < 0.01);
        assert!((Element::Cs.electronegativity().unwrap() - 0.79).abs() < 0.01);
        assert!(Element::He.electronegativity().is_none());
        assert!(Element::Ne.electronegativity().is_none());
    }

    #[test]
    fn atomic_weight_spot_check() {
        assert!((Element::H.atomic_weight() - 1.008).abs() < 0.001);
        assert!((Element::O.atomic_weight() - 15.999).abs() < 0.001);
        assert!((Element::Fe.atomic_weight() - 55.845).abs() < 0.001);
    }

    #[test]
    fn oxidation_states_most_common_first() {
        assert_eq!(Element::Fe.oxidation_states()[0], 3);
        assert_eq!(Element::O.oxidation_states()[0], -2);
        assert_eq!(Element::S.oxidation_states()[0], -2);
        assert_eq!(Element::Mn.oxidation_states(), &[2, 7, 4, 6, 3]);
    }

    #[test]
    fn oxidation_states_halogens_include_positive() {
        assert!(Element::Cl.oxidation_states().contains(&7));
        assert!(Element::I.oxidation_states().contains(&5));
        assert_eq!(Element::F.oxidation_states(), &[-1]);
    }

    #[test]
    fn light_noble_gases_have_no_states() {
        assert!(Element::He.oxidation_states().is_empty());
        assert!(Element::Ne.oxidation_states().is_empty());
        assert!(Element::Ar.oxidation_states().is_empty());
        assert!(!Element::Xe.oxidation_states().is_empty());
    }

    #[test]
    fn fixed_oxidation_groups() {
        assert_eq!(Element::Na.fixed_oxidation(), Some(1));
        assert_eq!(Element::Ca.fixed_oxidation(), Some(2));
        assert_eq!(Element::F.fixed_oxidation(), Some(-1));
        assert_eq!(Element::Al.fixed_oxidation(), Some(3));
        assert_eq!(Element::Fe.fixed_oxidation(), None);
        assert_eq!(Element::H.fixed_oxidation(), None);
        assert_eq!(Element::O.fixed_oxidation(), None);
    }

    #[test]
    fn fixed_states_are_listed_states() {
        for n in 1u8..=118 {
            let e = Element::from_atomic_num(n).unwrap();
            if let Some(fixed) = e.fixed_oxidation() {
                assert!(
                    e.oxidation_states().contains(&fixed),
                    "{} fixed state {} missing from common states",
                    e.symbol(),
                    fixed
                );
            }
        }
    }

    #[test]
    fn metal_classification() {
        assert!(Element::Na.is_metal());
        assert!(Element::Fe.is_metal());
        assert!(Element::Ca.is_metal());
        assert!(!Element::H.is_metal());
        assert!(!Element::C.is_metal());
        assert!(!Element::Si.is_metal());
        assert!(!Element::Te.is_metal());
    }

    #[test]
    fn all_symbols_unique() {
        use std::collections::HashSet;
        let symbols: HashSet<&str> = (1u8..=118)
            .map(|n| Element::from_atomic_num(n).unwrap().symbol())
            .collect();
        assert_eq!(symbols.len(), 118);
    }
}
