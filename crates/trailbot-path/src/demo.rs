//! The fixed demo path.

use crate::Waypoint;

/// A figure-eight through the origin, drawn as a closed loop.
///
/// Every waypoint uses heading 0 and an automatic goal speed.
pub const DEMO_WAYPOINTS: &[Waypoint] = &[
    Waypoint::at(0.0, 0.0),
    Waypoint::at(0.571194595265405, -0.4277145118491421),
    Waypoint::at(1.1417537280142898, -0.8531042347260006),
    Waypoint::at(1.7098876452457967, -1.2696346390611464),
    Waypoint::at(2.2705328851607995, -1.6588899151216996),
    Waypoint::at(2.8121159420106827, -1.9791445882187304),
    Waypoint::at(3.314589274316711, -2.159795566252656),
    Waypoint::at(3.7538316863009027, -2.1224619985315876),
    Waypoint::at(4.112485112342358, -1.8323249172947023),
    Waypoint::at(4.383456805594431, -1.3292669972090994),
    Waypoint::at(4.557386228943757, -0.6928302521681386),
    Waypoint::at(4.617455513800438, 0.00274597627737883),
    Waypoint::at(4.55408382321606, 0.6984486966257434),
    Waypoint::at(4.376054025556597, 1.3330664239172116),
    Waypoint::at(4.096280073621794, 1.827159263675668),
    Waypoint::at(3.719737492364894, 2.097949296701878),
    Waypoint::at(3.25277928312066, 2.108933125822431),
    Waypoint::at(2.7154386886417314, 1.9004760368018616),
    Waypoint::at(2.1347012144725985, 1.552342808106984),
    Waypoint::at(1.5324590525923942, 1.134035376721349),
    Waypoint::at(0.9214084611203568, 0.6867933269918683),
    Waypoint::at(0.30732366808208345, 0.22955002391894264),
    Waypoint::at(-0.3075127599907512, -0.2301742560363831),
    Waypoint::at(-0.9218413719658775, -0.6882173194028102),
    Waypoint::at(-1.5334674079795052, -1.1373288016589413),
    Waypoint::at(-2.1365993767877467, -1.5584414896876835),
    Waypoint::at(-2.7180981380280307, -1.9086314914221845),
    Waypoint::at(-3.2552809639439704, -2.1153141204181285),
    Waypoint::at(-3.721102967810494, -2.0979137913841046),
    Waypoint::at(-4.096907306768644, -1.8206318841755131),
    Waypoint::at(-4.377088212533404, -1.324440752295139),
    Waypoint::at(-4.555249804461285, -0.6910016662308593),
    Waypoint::at(-4.617336323713965, 0.003734984720118972),
    Waypoint::at(-4.555948690867849, 0.7001491248072772),
    Waypoint::at(-4.382109193278264, 1.3376838311365633),
    Waypoint::at(-4.111620918085742, 1.8386823176628544),
    Waypoint::at(-3.7524648889185794, 2.1224985058331005),
    Waypoint::at(-3.3123191098095615, 2.153588702898333),
    Waypoint::at(-2.80975246649598, 1.9712114570096653),
    Waypoint::at(-2.268856462266256, 1.652958931009528),
    Waypoint::at(-1.709001159778989, 1.2664395490411673),
    Waypoint::at(-1.1413833971013372, 0.8517589252820573),
    Waypoint::at(-0.5710732645795573, 0.4272721367616211),
];
