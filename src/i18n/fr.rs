//! French translations / Traductions fran\u{00E7}aises

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Général
    t.insert("app.title".into(), "Estimateur de prix Qatmeer".into());
    t.insert("common.none".into(), "Aucune".into());

    // Estimation
    t.insert("estimate.title".into(), "Co\u{00FB}t estim\u{00E9}".into());
    t.insert("estimate.tier".into(), "Formule".into());
    t.insert("estimate.base".into(), "Prix de base".into());
    t.insert("estimate.upgrade".into(), "Mise \u{00E0} niveau".into());
    t.insert("estimate.addons".into(), "Options".into());
    t.insert("estimate.total".into(), "Total".into());
    t.insert("estimate.throughput".into(), "D\u{00E9}bit recommand\u{00E9}".into());
    t.insert("estimate.recommended_addons".into(), "Options recommand\u{00E9}es".into());

    // Catalogue
    t.insert("catalog.tiers".into(), "Formules".into());
    t.insert("catalog.upgrades".into(), "Mises \u{00E0} niveau".into());
    t.insert("catalog.addons".into(), "Options".into());

    // Formules
    t.insert("tier.pilot".into(), "Pilote".into());
    t.insert("tier.production".into(), "Production".into());
    t.insert("tier.enterprise".into(), "Entreprise".into());

    // Mises \u{00E0} niveau
    t.insert("upgrade.delta-sorting".into(), "Tri Delta".into());

    // Options
    t.insert("addon.delay-machine".into(), "Machine de temporisation".into());
    t.insert("addon.washing-station".into(), "Station de lavage".into());

    // Consentement
    t.insert("consent.banner".into(), "Nous enregistrons vos pr\u{00E9}f\u{00E9}rences sur cet appareil. Lancez `consent --accept` pour accepter.".into());
    t.insert("consent.accepted".into(), "Pr\u{00E9}f\u{00E9}rences accept\u{00E9}es.".into());
    t.insert("consent.given".into(), "Consentement : accept\u{00E9}".into());
    t.insert("consent.pending".into(), "Consentement : non donn\u{00E9}".into());

    // Session interactive
    t.insert("interactive.welcome".into(), "Tapez `help` pour les commandes, `quit` pour quitter.".into());
    t.insert("interactive.help".into(), "Commandes : tier <id> | upgrade <id|none> | addon <id> | show | lang [en|fr] | help | quit".into());
    t.insert("interactive.unknown".into(), "Commande inconnue".into());
    t.insert("lang.switched".into(), "Langue : fran\u{00E7}ais".into());

    t
}
