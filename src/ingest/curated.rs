//! The curated seed catalog: reference individuals that predate the external
//! tables or were published after the ingested release. Seeded into every
//! index after external rows, through the same insertion rule, so corrections
//! never require touching the external dataset.
//!
//! Provenance tags name the citation route: "manual" for hand-checked
//! literature entries, "media4_S4b" for the supplementary-table import, and
//! "Kilinc2023" for the North Asian genomes from Kilinc et al. 2023
//! (doi:10.1016/j.cub.2022.11.062).

use crate::adna::sample::Sample;

const KILINC: &str = "Kilinc et al. 2023. Curr. Biol. doi:10.1016/j.cub.2022.11.062";

pub fn curated_samples() -> Vec<Sample> {
    vec![
        Sample::new("Ranis-GH4-manual", "manual")
            .with_group("Germany_Ranis_45000BP")
            .with_place("Ranis Cave (Ilsenhöhle), Thuringia", "Germany")
            .with_coordinates(50.65, 11.57)
            .with_year(-43050)
            .with_publication("Pearce2024Nature / Welker2024Nature")
            .with_maternal("U5b1"),
        Sample::new("Ust_Ishim-manual", "media4_S4b")
            .with_group("Russia_UstIshim_43000BP")
            .with_place("Ust'-Ishim, Siberia", "Russia")
            .with_coordinates(57.71, 71.36)
            .with_year(-43070)
            .with_publication("Fu et al. 2014")
            .with_maternal("R"),
        Sample::new("Kostenki14-manual", "media4_S4b")
            .with_group("Russia_Kostenki_35000BP")
            .with_place("Kostenki, Voronezh Oblast", "Russia")
            .with_coordinates(51.39, 39.06)
            .with_year(-35523)
            .with_publication("Seguin-Orlando et al. 2014")
            .with_maternal("U2"),
        Sample::new("Sunghir1-manual", "media4_S4b")
            .with_group("Russia_Sunghir_30000BP")
            .with_place("Sunghir, Vladimir Oblast", "Russia")
            .with_coordinates(56.19, 40.53)
            .with_year(-30872)
            .with_publication("Sikora et al. 2017")
            .with_maternal("U8c"),
        Sample::new("KremsWA3-manual", "media4_S4b")
            .with_group("Austria_Krems_29000BP")
            .with_place("Krems-Wachtberg", "Austria")
            .with_coordinates(48.41, 15.60)
            .with_year(-29020)
            .with_publication("Fu et al. 2016")
            .with_maternal("U5"),
        Sample::new("Paglicci133-manual", "media4_S4b")
            .with_group("Italy_Paglicci_27000BP")
            .with_place("Grotta Paglicci, Apulia", "Italy")
            .with_coordinates(41.63, 15.53)
            .with_year(-26750)
            .with_publication("Posth et al. 2016; Fu et al. 2016")
            .with_maternal("U8c"),
        Sample::new("ElMiron-manual", "media4_S4b")
            .with_group("Spain_ElMiron_17000BP")
            .with_place("El Miron Cave, Cantabria", "Spain")
            .with_coordinates(43.22, -3.57)
            .with_year(-16770)
            .with_publication("Fu et al. 2016")
            .with_maternal("U5b"),
        Sample::new("Paglicci71-manual", "media4_S4b")
            .with_group("Italy_Paglicci_17000BP")
            .with_place("Grotta Paglicci, Apulia", "Italy")
            .with_coordinates(41.63, 15.53)
            .with_year(-16635)
            .with_publication("Posth et al. 2016")
            .with_maternal("U5b2b"),
        Sample::new("HohleFels49-manual", "media4_S4b")
            .with_group("Germany_HohleFels_14000BP")
            .with_place("Hohle Fels, Swabian Alb", "Germany")
            .with_coordinates(48.37, 9.75)
            .with_year(-13959)
            .with_publication("Posth et al. 2016; Fu et al. 2016")
            .with_maternal("U8a"),
        Sample::new("Oberkassel998-manual", "media4_S4b")
            .with_group("Germany_Oberkassel_12000BP")
            .with_place("Oberkassel, Düsseldorf", "Germany")
            .with_coordinates(51.22, 6.77)
            .with_year(-12070)
            .with_publication("Fu et al. 2013b")
            .with_maternal("U5b1"),
        Sample::new("Villabruna-manual", "media4_S4b")
            .with_group("Italy_Villabruna_12000BP")
            .with_place("Villabruna, Veneto", "Italy")
            .with_coordinates(46.02, 11.89)
            .with_year(-12030)
            .with_publication("Fu et al. 2016")
            .with_maternal("U5b2b"),
        Sample::new("Bichon-manual", "media4_S4b")
            .with_group("Switzerland_Bichon_11500BP")
            .with_place("La Bichonne Cave, Jura", "Switzerland")
            .with_coordinates(47.10, 6.90)
            .with_year(-11550)
            .with_publication("Jones et al. 2015")
            .with_maternal("U5b1h"),
        Sample::new("Motala309-manual", "media4_S4b")
            .with_group("Sweden_Motala_7700BP")
            .with_place("Kanaljorden, Motala", "Sweden")
            .with_coordinates(58.53, 15.03)
            .with_year(-5715)
            .with_publication("Mittnik et al. 2018")
            .with_maternal("U5a2d"),
        Sample::new("Motala363-manual", "media4_S4b")
            .with_group("Sweden_Motala_7700BP")
            .with_place("Kanaljorden, Motala", "Sweden")
            .with_coordinates(58.53, 15.03)
            .with_year(-5618)
            .with_publication("Mittnik et al. 2018")
            .with_maternal("U5a1"),
        // Kilinc et al. 2023: Altai-Sayan, Russian Far East and Kamchatka
        // genomes bridging West Siberian and European hunter-gatherer pools.
        Sample::new("FRS001-manual", "Kilinc2023")
            .with_group("Altai_7500BP")
            .with_place("Frolovskiy, Altai-Sayan", "Russia")
            .with_coordinates(53.337, 83.93)
            .with_year(-5434)
            .with_publication(KILINC)
            .with_maternal("U2e1b")
            .with_terminal("CT"),
        Sample::new("FRS002-manual", "Kilinc2023")
            .with_group("Altai_7500BP")
            .with_place("Frolovskiy, Altai-Sayan", "Russia")
            .with_coordinates(53.337, 83.93)
            .with_year(-5434)
            .with_publication(KILINC)
            .with_maternal("C")
            .with_terminal("Q1a1")
            .with_isogg("Q1a1"),
        Sample::new("NVR001-manual", "Kilinc2023")
            .with_group("Altai_6500BP")
            .with_place("Novorybinskiy, Altai-Sayan", "Russia")
            .with_coordinates(53.371, 83.92)
            .with_year(-4252)
            .with_publication(KILINC)
            .with_maternal("D4j")
            .with_terminal("Q1a1")
            .with_isogg("Q1a1"),
        Sample::new("TZB001-manual", "Kilinc2023")
            .with_group("Altai_5500BP")
            .with_place("Tzebotarevo, Altai-Sayan", "Russia")
            .with_coordinates(53.269, 83.811)
            .with_year(-3423)
            .with_publication(KILINC)
            .with_maternal("C4+152")
            .with_terminal("C2b1")
            .with_isogg("C2b1"),
        Sample::new("TZB002-manual", "Kilinc2023")
            .with_group("Altai_5500BP")
            .with_place("Tzebotarevo, Altai-Sayan", "Russia")
            .with_coordinates(53.269, 83.811)
            .with_year(-3895)
            .with_publication(KILINC)
            .with_maternal("R1b")
            .with_terminal("C2b")
            .with_isogg("C2b"),
        Sample::new("NIZ001-manual", "Kilinc2023")
            .with_group("Nizhnetytkesken_6500BP")
            .with_place("Nizhnetytkesken, Altai-Sayan", "Russia")
            .with_coordinates(51.1997, 86.0733)
            .with_year(-4391)
            .with_publication(KILINC)
            .with_maternal("A")
            .with_terminal("C2b1a1")
            .with_isogg("C2b1a1"),
        Sample::new("LetuchayaMysh-manual", "Kilinc2023")
            .with_group("LetuchayaMysh_7000BP")
            .with_place("Letuchaya Mysh (Bat Cave), Primorsky Krai", "Russia")
            .with_coordinates(42.999, 133.095)
            .with_year(-4832)
            .with_publication(KILINC)
            .with_maternal("D4b1a2a")
            .with_terminal("C2b")
            .with_isogg("C2b"),
        Sample::new("KMT001-manual", "Kilinc2023")
            .with_group("Kamchatka_400BP")
            .with_place("Kamchatka Peninsula (Ust-Khayryuzovo area)", "Russia")
            .with_coordinates(55.461, 159.68)
            .with_year(304)
            .with_publication(KILINC)
            .with_maternal("G1b"),
        Sample::new("KMT002-manual", "Kilinc2023")
            .with_group("Kamchatka_400BP")
            .with_place("Kamchatka Peninsula (Ust-Khayryuzovo area)", "Russia")
            .with_coordinates(55.461, 159.68)
            .with_year(372)
            .with_publication(KILINC)
            .with_maternal("G1b")
            .with_terminal("Q1a1")
            .with_isogg("Q1a1"),
        Sample::new("KMT003-manual", "Kilinc2023")
            .with_group("Kamchatka_400BP")
            .with_place("Kamchatka Peninsula (Ust-Khayryuzovo area)", "Russia")
            .with_coordinates(55.461, 159.68)
            .with_year(832)
            .with_publication(KILINC)
            .with_maternal("G1b")
            .with_terminal("Q1a1")
            .with_isogg("Q1a1"),
    ]
}
