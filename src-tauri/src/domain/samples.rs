//! Built-in sample ports the registry is seeded with at startup

use super::port::PortConfig;

/// (name, applicationRootUrl, apiRootUrl, mainAppUrl, ocpRootUrl)
const SAMPLES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "G8Tab",
        "https://qag.businessnext.crmnextlab.com/g8mobile/",
        "https://qag.businessnext.crmnextlab.com/g8restapi/",
        "https://qag.businessnext.crmnextlab.com/g8tab/",
        "https://qag.businessnext.crmnextlab.com/g8ocp/",
    ),
    (
        "SAML PORT - ocpclientgold8sql",
        "https://qag.businessnext.crmnextlab.com/mobile/",
        "https://qag.businessnext.crmnextlab.com/restapidotnet/",
        "https://qag.businessnext.crmnextlab.com/tab/",
        "https://qag.businessnext.crmnextlab.com/ocpclientgold8sql/",
    ),
    (
        "IOB-SIT",
        "https://crmsit.iob.in/mobile/",
        "https://crmsit.iob.in/restapi2/",
        "https://crmsit.iob.in/app/",
        "",
    ),
    (
        "SBI_G7",
        "https://uat.crm.sbi.co.in/apk7/mobile/",
        "https://uat.crm.sbi.co.in/apk7/CRMnextRestAPI/",
        "https://uat.crm.sbi.co.in/apk7/tab/",
        "",
    ),
    (
        "GA-SQL",
        "https://qag.businessnext.crmnextlab.com/gasqlmobile/",
        "https://qag.businessnext.crmnextlab.com/gasqlrestapi/",
        "https://qag.businessnext.crmnextlab.com/gasqlmobile/",
        "https://qag.businessnext.crmnextlab.com/ocpclientgold8sql/",
    ),
    (
        "SBIGOLD7_SA",
        "https://b147.businessbywire.com/sbigold7_sa/mobile/",
        "https://b147.businessbywire.com/sbigold7_sa/CRMnextRestAPI/",
        "https://b147.businessbywire.com/sbigold7_sa/tab/",
        "",
    ),
    (
        "gold8appsql",
        "https://qag.businessnext.crmnextlab.com/gold8mobilesql/",
        "https://qag.businessnext.crmnextlab.com/gold8restapisql/",
        "https://qag.businessnext.crmnextlab.com/gold8appsql/MobileSettings/GenerateQRCode/",
        "https://qag.businessnext.crmnextlab.com/ocpclientgold8sql/",
    ),
    (
        "IOB-SIT-ALT",
        "https://crmsit.iob.in/mobile/",
        "https://crmsit.iob.in/restapi2/",
        "https://crmsit.iob.in/app/",
        "",
    ),
    (
        "PMLI-UAT",
        "https://crm.uat.pnbmetlife.com/mobilepmli/",
        "https://crm.uat.pnbmetlife.com/restapipmli/",
        "http://atyourservice-app.apps.uat.pmli.corp/apppm/",
        "",
    ),
    (
        "gold8tabsql",
        "https://qag.businessnext.crmnextlab.com/gold8mobilesql/",
        "https://qag.businessnext.crmnextlab.com/gold8restapisql/",
        "https://qag.businessnext.crmnextlab.com/gold8tabsql/",
        "https://qag.businessnext.crmnextlab.com/ocpclientgold8sql/",
    ),
    (
        "mobile7ora",
        "https://s4.businessbywire.com/mobile7ora/",
        "https://s4.businessbywire.com/restapi7ora/",
        "https://s4.businessbywire.com/app7ora/login/login",
        "http://s4.businessbywire.com/identityserver7ora ",
    ),
    (
        "gold8tabora",
        "https://qag.businessnext.crmnextlab.com/gold8mobileora/",
        "https://qag.businessnext.crmnextlab.com/gold8restapiora/",
        "https://qag.businessnext.crmnextlab.com/gold8tabora/",
        "https://qag.businessnext.crmnextlab.com/gold8ocpora/",
    ),
    (
        "tabnpgs",
        "https://qag.businessnext.crmnextlab.com/mobilenpgs/",
        "https://qag.businessnext.crmnextlab.com/restapinpgs/",
        "https://qag.businessnext.crmnextlab.com/tabnpgs/",
        "https://qag.businessnext.crmnextlab.com/ocpclientpostgressql1/",
    ),
    (
        "SALES-restapisales",
        "https://b22.businessbywire.com/mobilesales/",
        "https://b22.businessbywire.com/restapisales/",
        "https://b22.businessbywire.com/appsales/MobileSettings/GenerateQRCode/",
        "",
    ),
    (
        "DEMO-tabdemo",
        "https://qag.businessnext.crmnextlab.com/mobiledemo/",
        "https://qag.businessnext.crmnextlab.com/restapidemo/",
        "https://qag.businessnext.crmnextlab.com/tabdemo/",
        "",
    ),
    (
        "app03ora",
        "https://b18.businessbywire.com/mobile03ora/",
        "https://b18.businessbywire.com/restapi03ora/",
        "https://b18.businessbywire.com/app03ora/MobileSettings/GenerateQRCode/",
        "https://b18.businessbywire.com/ocpclient03ora/",
    ),
    (
        "GOLD8-gold8tabsql",
        "https://qag.businessnext.crmnextlab.com/gold8mobilesql/",
        "https://qag.businessnext.crmnextlab.com/gold8restapisql/",
        "https://qag.businessnext.crmnextlab.com/gold8tabsql/",
        "https://qag.businessnext.crmnextlab.com/ocpclientgold8sql/",
    ),
    (
        "restapi03ora",
        "https://b18.businessbywire.com/mobile03ora/",
        "https://b18.businessbywire.com/restapi03ora/",
        "https://b18.businessbywire.com/app03ora/MobileSettings/GenerateQRCode/",
        "https://b18.businessbywire.com/ocpclient03ora/",
    ),
];

/// Fresh records (new ids) for every sample, in seed order
pub fn sample_ports() -> Vec<PortConfig> {
    SAMPLES
        .iter()
        .map(|&(name, app, api, main, ocp)| PortConfig::new(name, app, api, main, ocp))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_eighteen_ports_with_unique_ids() {
        let ports = sample_ports();
        assert_eq!(ports.len(), 18);
        let mut ids: Vec<_> = ports.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 18);
    }

    #[test]
    fn first_sample_is_g8tab() {
        let ports = sample_ports();
        assert_eq!(ports[0].name, "G8Tab");
        assert_eq!(ports[0].display_title(), "g8tab");
    }
}
